//! Class helpers shared by the chart and explanation components.

use crate::domain::ExplanationState;

// ============================================
// CONTRIBUTION STYLES
// ============================================

pub fn bar_class(amount: i64) -> &'static str {
    match amount.signum() {
        1 => "bar bar-increase",
        -1 => "bar bar-decrease",
        _ => "bar bar-neutral",
    }
}

pub fn value_class(amount: i64) -> &'static str {
    match amount.signum() {
        1 => "value-increase",
        -1 => "value-decrease",
        _ => "value-neutral",
    }
}

/// Inline style placing a bar on the left (decrease) or right (increase) of the axis.
pub fn bar_style(amount: i64, max_magnitude: u64) -> String {
    let scale = max_magnitude.max(1) as f64;
    let width = (amount.unsigned_abs() as f64 / scale * 50.0).clamp(0.0, 50.0);
    if amount >= 0 {
        format!("left: 50%; width: {width:.2}%;")
    } else {
        format!("right: 50%; width: {width:.2}%;")
    }
}

pub fn slider_background(fill_percent: f64) -> String {
    format!(
        "background: linear-gradient(to right, #818cf8 {fill_percent:.2}%, #334155 {fill_percent:.2}%);"
    )
}

// ============================================
// EXPLANATION STYLES
// ============================================

pub fn explain_button(state: &ExplanationState) -> &'static str {
    if state.is_loading() {
        "btn-explain btn-explain-loading"
    } else {
        "btn-explain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_grow_away_from_the_axis() {
        assert_eq!(bar_style(30_000, 30_000), "left: 50%; width: 50.00%;");
        assert_eq!(bar_style(-15_000, 30_000), "right: 50%; width: 25.00%;");
        assert_eq!(bar_style(0, 0), "left: 50%; width: 0.00%;");
    }

    #[test]
    fn classes_follow_sign() {
        assert_eq!(bar_class(1), "bar bar-increase");
        assert_eq!(value_class(-1), "value-decrease");
        assert_eq!(value_class(0), "value-neutral");
    }
}
