//! Prompt construction for the AI explanation.

use crate::util::format::{format_currency, format_signed_currency};

use super::contribution::ContributionBreakdown;

/// Renders the breakdown as the natural-language prompt sent to the model.
pub fn build_prompt(breakdown: &ContributionBreakdown) -> String {
    let lines: String = breakdown
        .contributions
        .iter()
        .map(|contribution| {
            format!(
                "  - {} ({}): {}\n",
                contribution.label,
                contribution.formatted_value,
                format_signed_currency(contribution.amount)
            )
        })
        .collect();

    format!(
        "You are a data scientist who is good at explaining models to people without a technical background.
Below is an additive feature-contribution breakdown (in the style of SHAP values) for a house price prediction. Explain it clearly and concisely.

**Prediction Details:**
- **Base Price (Average Price):** {base}
- **Final Predicted Price:** {predicted}

**Feature Contributions:**
{lines}
**Your Task:**
1. Briefly explain what the \"Base Price\" represents.
2. Explain how to read the \"Feature Contributions\": some features push the price up (positive) and some push it down (negative).
3. Walk through each feature and explain why its value likely moved the price in that direction relative to the average.
4. Finish by summarising how the contributions combine into the \"Final Predicted Price\".
5. Keep the tone friendly and informative, and avoid technical jargon.
",
        base = format_currency(breakdown.base_price),
        predicted = format_currency(breakdown.predicted_price),
    )
}
