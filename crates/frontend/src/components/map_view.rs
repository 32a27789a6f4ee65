use dioxus::prelude::*;
use servicemap_shared::controller::UiEvent;
use servicemap_shared::models::{CenterId, ServiceCenter};
use servicemap_shared::tooltip::Placement;
use servicemap_shared::view::{self, MarkerView, TooltipContent};

use crate::components::tooltip_card::TooltipCard;
use crate::coords::{self, MAP_CONTAINER_ID};

const MAP_IMAGE: Asset = asset!("/assets/map.svg");

#[derive(Debug, Clone, PartialEq)]
struct OpenTooltip {
    content: TooltipContent,
    placement: Placement,
}

/// Show the tooltip for `id`, measured against the rendered marker.
fn open_tooltip(
    mut tooltip: Signal<Option<OpenTooltip>>,
    records: Signal<Vec<ServiceCenter>>,
    id: CenterId,
) {
    let Some(content) = records
        .read()
        .iter()
        .find(|c| c.id == id)
        .map(view::tooltip_content)
    else {
        return;
    };
    let Some(placement) = coords::tooltip_placement(id) else {
        return;
    };
    tooltip.set(Some(OpenTooltip { content, placement }));
}

#[component]
pub fn MapView(
    markers: Vec<MarkerView>,
    records: Signal<Vec<ServiceCenter>>,
    on_event: EventHandler<UiEvent>,
) -> Element {
    let mut tooltip = use_signal(|| None::<OpenTooltip>);

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "map-container",

            img {
                class: "map-image",
                src: MAP_IMAGE,
                alt: "Service area map",
                draggable: false,
            }

            div { id: "markerLayer", class: "marker-layer",
                for marker in markers.iter() {
                    div {
                        key: "{marker.id}",
                        id: "{coords::marker_dom_id(marker.id)}",
                        class: "{marker.class_list()}",
                        role: "button",
                        tabindex: "{marker.tab_index()}",
                        "aria-label": "{marker.aria_label}",
                        "data-id": "{marker.id}",
                        style: "left: {marker.left_percent}%; top: {marker.top_percent}%;",
                        onclick: {
                            let id = marker.id;
                            move |_| on_event.call(UiEvent::MarkerClicked(id))
                        },
                        onmouseenter: {
                            let id = marker.id;
                            move |_| open_tooltip(tooltip, records, id)
                        },
                        onfocus: {
                            let id = marker.id;
                            move |_| open_tooltip(tooltip, records, id)
                        },
                        onmouseleave: move |_| tooltip.set(None),
                        onblur: move |_| tooltip.set(None),
                    }
                }
            }

            if let Some(open) = tooltip() {
                TooltipCard { content: open.content, placement: open.placement }
            }
        }
    }
}
