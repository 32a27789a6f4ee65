use dioxus::prelude::*;
use servicemap_shared::controller::UiEvent;

#[component]
pub fn FilterControls(show_support_centers: bool, on_event: EventHandler<UiEvent>) -> Element {
    rsx! {
        div { class: "panel",
            label { class: "toggle-row",
                input {
                    id: "toggleSupport",
                    r#type: "checkbox",
                    checked: show_support_centers,
                    onchange: move |evt: Event<FormData>| {
                        on_event.call(UiEvent::SupportToggled(evt.checked()));
                    },
                }
                span { "Show support centers" }
            }
            div { style: "margin-top: 8px;",
                button {
                    id: "resetBtn",
                    class: "secondary",
                    onclick: move |_| on_event.call(UiEvent::Reset),
                    "Reset"
                }
            }
        }
    }
}
