use dioxus::prelude::*;

#[component]
pub fn InfoTooltip(text: String) -> Element {
    rsx! {
        span { class: "tooltip",
            span { class: "tooltip-icon", "ⓘ" }
            span { class: "tooltip-text", "{text}" }
        }
    }
}
