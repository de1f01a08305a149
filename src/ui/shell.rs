use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "page",
            div { class: "container",
                header {
                    class: "app-header",
                    h1 { class: "app-title", "Interactive SHAP Explainer" }
                    p { class: "app-subtitle",
                        "See how a model arrives at a prediction. Adjust the features of a house and watch, in real time, how each one pushes the predicted price up or down."
                    }
                }
                main { {children} }
                footer { class: "app-footer", "{APP_NAME} {version}" }
            }
        }
    }
}
