use dioxus::prelude::*;
use servicemap_shared::controller::UiEvent;

#[component]
pub fn RegionFilter(
    regions: Vec<String>,
    selected: String,
    on_event: EventHandler<UiEvent>,
) -> Element {
    rsx! {
        div { class: "panel",
            h3 { "Region" }
            select {
                id: "stateFilter",
                "aria-label": "Filter by state",
                value: "{selected}",
                onchange: move |evt: Event<FormData>| {
                    on_event.call(UiEvent::RegionChanged(evt.value()));
                },
                option { value: "", selected: selected.is_empty(), "All States" }
                for region in regions.iter() {
                    option {
                        key: "{region}",
                        value: "{region}",
                        selected: *region == selected,
                        "{region}"
                    }
                }
            }
        }
    }
}
