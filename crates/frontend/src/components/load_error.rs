use dioxus::prelude::*;

#[component]
pub fn LoadError(message: String, detail: String) -> Element {
    rsx! {
        div { class: "load-error", role: "alert",
            h2 { "Could not load service centers" }
            p { "{message}" }
            p { class: "load-error-detail", "{detail}" }
        }
    }
}
