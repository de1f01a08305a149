use dioxus::prelude::*;

use crate::{
    domain::{Contribution, ContributionBreakdown},
    ui::{components::kpi_card::KpiCard, theme},
    util::format::{format_currency, format_signed_currency},
};

const BASE_PRICE_HINT: &str =
    "The average price for this location. It is the starting point for the prediction.";
const PREDICTION_HINT: &str =
    "The base price after adding or subtracting every feature's contribution.";

/// Diverging bar chart of feature contributions, largest first.
#[component]
pub fn ContributionChart(breakdown: ContributionBreakdown) -> Element {
    let max_magnitude = breakdown.max_magnitude();
    let rows = breakdown
        .ranked()
        .into_iter()
        .map(|contribution| BarRow::new(contribution, max_magnitude))
        .collect::<Vec<_>>();
    let increases = format_signed_currency(breakdown.increase_total());
    let decreases = format_signed_currency(breakdown.decrease_total());

    rsx! {
        div {
            class: "chart",
            div { class: "chart-kpis",
                KpiCard {
                    title: "Base Price".to_string(),
                    value: format_currency(breakdown.base_price),
                    description: Some(BASE_PRICE_HINT.to_string()),
                    accent: "kpi-base",
                }
                KpiCard {
                    title: "Final Prediction".to_string(),
                    value: format_currency(breakdown.predicted_price),
                    description: Some(PREDICTION_HINT.to_string()),
                    accent: "kpi-predicted",
                }
            }
            ul {
                class: "chart-rows",
                for row in rows {
                    li {
                        key: "{row.key}",
                        class: "chart-row",
                        title: "Value: {row.value}",
                        span { class: "chart-label", "{row.label}" }
                        div { class: "chart-track",
                            div { class: "chart-axis" }
                            div { class: "{row.bar_class}", style: "{row.bar_style}" }
                        }
                        span { class: "{row.value_class}", "{row.amount}" }
                    }
                }
            }
            div { class: "chart-legend",
                div { class: "legend-item",
                    div { class: "legend-swatch bar-increase" }
                    span { "Increases Price ({increases})" }
                }
                div { class: "legend-item",
                    div { class: "legend-swatch bar-decrease" }
                    span { "Decreases Price ({decreases})" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct BarRow {
    key: &'static str,
    label: String,
    value: String,
    amount: String,
    bar_class: &'static str,
    bar_style: String,
    value_class: &'static str,
}

impl BarRow {
    fn new(contribution: Contribution, max_magnitude: u64) -> Self {
        Self {
            key: contribution.feature_id.key(),
            bar_class: theme::bar_class(contribution.amount),
            bar_style: theme::bar_style(contribution.amount, max_magnitude),
            value_class: theme::value_class(contribution.amount),
            amount: format_signed_currency(contribution.amount),
            label: contribution.label,
            value: contribution.formatted_value,
        }
    }
}
