use dioxus::prelude::*;
use tracing::debug;

use crate::{
    app::request_explanation_for,
    domain::{AppState, FeatureId},
    ui::components::{
        contribution_chart::ContributionChart, explanation_card::ExplanationCard,
        feature_control::FeatureControl, location_control::LocationControl, toast::ToastMessage,
    },
};

#[component]
pub fn PredictorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let controls = state.with(|st| {
        st.features()
            .iter()
            .map(|feature| (feature.id.key(), feature.id, feature.clone()))
            .collect::<Vec<_>>()
    });
    let location_code = state.with(|st| st.location_code().to_string());
    let explanation = state.with(|st| st.explanation.clone());
    let breakdown = state.with(|st| st.snapshot().breakdown());
    debug!(
        base_price = breakdown.base_price,
        predicted_price = breakdown.predicted_price,
        "Recomputed prediction"
    );

    let on_location_change = {
        let mut state = state.clone();
        move |raw: String| {
            state.with_mut(|st| st.set_location_code(&raw));
        }
    };

    let on_explain = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| request_explanation_for(state.clone(), toasts.clone())
    };

    rsx! {
        div { class: "layout",
            section {
                class: "panel",
                h2 { class: "panel-title", "House Features" }
                div { class: "stack",
                    for (key, id, feature) in controls {
                        FeatureControl {
                            key: "{key}",
                            feature,
                            on_change: move |value: f64| update_feature(state, id, value),
                        }
                    }
                    LocationControl { code: location_code, on_change: on_location_change }
                }
            }
            section {
                class: "panel",
                h2 { class: "panel-title", "Prediction Explanation" }
                p { class: "panel-lead", "Visualizing feature contributions to the final price." }
                p { class: "note",
                    "The "
                    strong { "Base Price" }
                    " is the average price for a given location and serves as the starting point. The bars below show how each feature you selected pushes the final prediction away from that average."
                }
                ContributionChart { breakdown }
                ExplanationCard { state: explanation, on_explain }
            }
        }
    }
}

fn update_feature(mut state: Signal<AppState>, id: FeatureId, value: f64) {
    state.with_mut(|st| st.set_feature_value(id, value));
}
