use dioxus::prelude::*;

#[component]
pub fn ResultOverlay(message: Option<String>, on_reset: EventHandler<()>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div { class: "result-overlay active",
            div { class: "result-card",
                p { class: "result-text", "{message}" }
                button {
                    onclick: move |_| on_reset.call(()),
                    "もう一度投げる"
                }
            }
        }
    }
}
