use dioxus::prelude::*;

use crate::domain::Feature;
use crate::ui::theme;

/// Labelled range slider for a single house feature.
#[component]
pub fn FeatureControl(feature: Feature, on_change: EventHandler<f64>) -> Element {
    let display = feature.format_value();
    let background = theme::slider_background(feature.fill_percent());
    let input_id = format!("feature-{}", feature.id.key());

    rsx! {
        div {
            class: "feature-control",
            div { class: "feature-header",
                span { class: "feature-label", "{feature.label}" }
                span { class: "feature-value", "{display}" }
            }
            input {
                id: "{input_id}",
                class: "slider",
                r#type: "range",
                min: "{feature.min}",
                max: "{feature.max}",
                step: "{feature.step}",
                value: "{feature.value}",
                style: "{background}",
                oninput: move |evt| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        on_change.call(value);
                    }
                },
            }
        }
    }
}
