use dioxus::prelude::*;
use servicemap_shared::view::Stats;

#[component]
pub fn StatsPanel(stats: Stats) -> Element {
    rsx! {
        div { class: "panel stats",
            div { class: "stat",
                span { id: "visibleCount", class: "stat-value", "{stats.visible_count}" }
                span { class: "stat-label", "Visible centers" }
            }
            div { class: "stat",
                span { id: "stateCount", class: "stat-value", "{stats.state_count}" }
                span { class: "stat-label", "States" }
            }
        }
    }
}
