use dioxus::prelude::*;
use servicemap_shared::controller::{NavKey, UiEvent};
use servicemap_shared::view::SuggestionView;

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::ArrowDown => Some(NavKey::Down),
        Key::ArrowUp => Some(NavKey::Up),
        Key::Enter => Some(NavKey::Enter),
        Key::Escape => Some(NavKey::Escape),
        _ => None,
    }
}

/// Search input with its type-ahead dropdown.
///
/// The input is controlled: its text is always `query`. Clicks inside stop
/// propagating so the page-level "click outside" handler only sees the rest.
#[component]
pub fn SearchBox(
    query: String,
    suggestions: Vec<SuggestionView>,
    open: bool,
    on_event: EventHandler<UiEvent>,
) -> Element {
    let show_dropdown = open && !query.is_empty();

    rsx! {
        div {
            class: "panel search-wrap",
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

            h3 { "Search" }
            input {
                id: "searchCenter",
                r#type: "text",
                autocomplete: "off",
                placeholder: "Name, city or brand...",
                "aria-label": "Search service centers",
                "aria-expanded": "{show_dropdown}",
                value: "{query}",
                oninput: move |evt: Event<FormData>| {
                    on_event.call(UiEvent::SearchInput(evt.value()));
                },
                onfocus: move |_| on_event.call(UiEvent::SearchFocused),
                onkeydown: move |evt: Event<KeyboardData>| {
                    let Some(key) = nav_key(&evt.key()) else { return };
                    if key != NavKey::Escape {
                        evt.prevent_default();
                    }
                    on_event.call(UiEvent::Key(key));
                },
            }

            if show_dropdown {
                div { id: "suggestions", class: "suggestions active", role: "listbox",
                    if suggestions.is_empty() {
                        div { class: "suggestion-item is-placeholder", "No matches found" }
                    }
                    for item in suggestions.iter() {
                        div {
                            key: "{item.id}",
                            class: if item.selected { "suggestion-item selected" } else { "suggestion-item" },
                            role: "option",
                            "aria-selected": "{item.selected}",
                            "data-id": "{item.id}",
                            onclick: {
                                let id = item.id;
                                move |_| on_event.call(UiEvent::SuggestionClicked(id))
                            },
                            div { class: "suggestion-title", "{item.title}" }
                            div { class: "suggestion-sub",
                                "{item.subtitle}"
                                span { class: "brand-tag {item.brand_class}", "{item.brand_tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
