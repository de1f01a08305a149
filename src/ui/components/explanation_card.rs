use dioxus::prelude::*;

use crate::{domain::ExplanationState, ui::theme};

#[component]
pub fn ExplanationCard(state: ExplanationState, on_explain: EventHandler<()>) -> Element {
    let loading = state.is_loading();
    let button_class = theme::explain_button(&state);
    let button_label = if loading {
        "Thinking..."
    } else {
        "Explain with Gemini"
    };

    rsx! {
        div {
            class: "explanation-card",
            match state {
                ExplanationState::Idle => rsx! {
                    p { class: "explanation-placeholder",
                        "Click the button to get an AI-powered explanation of this prediction."
                    }
                },
                ExplanationState::Loading => rsx! { LoadingSpinner {} },
                ExplanationState::Ready(text) => rsx! {
                    div {
                        h3 { class: "explanation-heading", "✨ AI Explanation" }
                        div { class: "explanation-text", "{text}" }
                    }
                },
                ExplanationState::Unavailable(message) | ExplanationState::Misconfigured(message) => rsx! {
                    p { class: "explanation-error", "{message}" }
                },
            }
            div { class: "explanation-actions",
                button {
                    class: "{button_class}",
                    disabled: loading,
                    onclick: move |_| on_explain.call(()),
                    "✨ {button_label}"
                }
            }
        }
    }
}

#[component]
fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner",
            div { class: "spinner-dot" }
            div { class: "spinner-dot" }
            div { class: "spinner-dot" }
            span { "Generating explanation..." }
        }
    }
}
