use dioxus::prelude::*;

#[component]
pub fn LocationControl(code: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "location-control",
            span { class: "feature-label", "Location (Zip Code)" }
            p { class: "hint", "The location affects the base price of the property." }
            input {
                id: "zip-code",
                class: "text-input",
                r#type: "text",
                maxlength: "5",
                pattern: "[0-9]*",
                placeholder: "e.g., 90210",
                value: "{code}",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}
