use dioxus::prelude::*;
use servicemap_shared::brands::LegendEntry;
use servicemap_shared::controller::UiEvent;

/// Keys that activate a `role="button"` element: Enter and Space.
fn activates(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// Brands present in the data. Clicking one searches for it.
#[component]
pub fn Legend(entries: Vec<LegendEntry>, on_event: EventHandler<UiEvent>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "panel",
            h3 { "Brands" }
            div { id: "legend", class: "legend",
                for entry in entries.iter() {
                    div {
                        key: "{entry.name}",
                        class: "legend-item",
                        role: "button",
                        tabindex: "0",
                        title: "Search {entry.name}",
                        onclick: {
                            let name = entry.name;
                            move |_| on_event.call(UiEvent::LegendClicked(name.to_string()))
                        },
                        onkeydown: {
                            let name = entry.name;
                            move |evt: Event<KeyboardData>| {
                                if activates(&evt.key()) {
                                    // Space would otherwise scroll the sidebar
                                    evt.prevent_default();
                                    on_event.call(UiEvent::LegendClicked(name.to_string()));
                                }
                            }
                        },
                        div { class: "legend-swatch {entry.css_class}" }
                        span { "{entry.name}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_space_activate() {
        assert!(activates(&Key::Enter));
        assert!(activates(&Key::Character(" ".to_string())));
    }

    #[test]
    fn test_other_keys_do_not_activate() {
        assert!(!activates(&Key::Tab));
        assert!(!activates(&Key::Escape));
        assert!(!activates(&Key::Character("a".to_string())));
    }
}
