use dioxus::prelude::*;
use servicemap_shared::tooltip::Placement;
use servicemap_shared::view::TooltipContent;

#[component]
pub fn TooltipCard(content: TooltipContent, placement: Placement) -> Element {
    rsx! {
        div {
            id: "tooltip",
            class: "tooltip is-open",
            role: "tooltip",
            style: "{placement.style()}",
            div { class: "tooltip-title", "{content.title}" }
            div { class: "tooltip-address",
                "{content.address}"
                br {}
                span { class: "tooltip-detail", "{content.detail_line()}" }
            }
            div { class: "tooltip-badges",
                span { class: "badge {content.brand_class}", "{content.brand_name}" }
                if content.is_support_center {
                    span { class: "badge badge-support", "Support Center" }
                }
            }
        }
    }
}
