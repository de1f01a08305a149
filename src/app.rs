use dioxus::{prelude::*, signals::Signal};
use tracing::warn;

use crate::{
    domain::{AppState, ExplanationState},
    infra::explainer::{request_explanation, Explanation},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::PredictorPage,
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Predictor {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Starts an explanation request for the current prediction unless one is pending.
pub fn request_explanation_for(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    if !state.with_mut(|st| st.begin_explanation()) {
        return;
    }
    let breakdown = state.with(|st| st.snapshot().breakdown());

    spawn(async move {
        let next = match request_explanation(&breakdown).await {
            Ok(Explanation::Generated(text)) => {
                push_toast(toasts.clone(), ToastKind::Success, "Explanation ready.");
                ExplanationState::Ready(text)
            }
            Ok(Explanation::Fallback(message)) => {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "The explanation service is unavailable right now.",
                );
                ExplanationState::Unavailable(message)
            }
            Err(err) => {
                warn!("Explanations disabled: {err}");
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Explanations are not configured: {err}"),
                );
                ExplanationState::Misconfigured(format!("Configuration error: {err}"))
            }
        };
        state.with_mut(|st| st.explanation = next);
    });
}

#[component]
pub fn Predictor() -> Element {
    rsx! { Shell { PredictorPage {} } }
}
