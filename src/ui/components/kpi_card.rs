use dioxus::prelude::*;

use crate::ui::components::tooltip::InfoTooltip;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    accent: &'static str,
) -> Element {
    rsx! {
        div {
            class: "kpi-card",
            div { class: "kpi-title",
                h3 { "{title}" }
                if let Some(desc) = description {
                    InfoTooltip { text: desc }
                }
            }
            p { class: "kpi-value {accent}", "{value}" }
        }
    }
}
