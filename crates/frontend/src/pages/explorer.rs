use dioxus::prelude::*;
use servicemap_shared::brands;
use servicemap_shared::controller::{self, UiEvent};
use servicemap_shared::error::DataLoadError;
use servicemap_shared::filter;
use servicemap_shared::models::ServiceCenter;
use servicemap_shared::state::UiState;
use servicemap_shared::view;

use crate::api;
use crate::components::filter_controls::FilterControls;
use crate::components::legend::Legend;
use crate::components::load_error::LoadError;
use crate::components::map_view::MapView;
use crate::components::region_filter::RegionFilter;
use crate::components::search_box::SearchBox;
use crate::components::stats_panel::StatsPanel;
use crate::coords;

fn alert_load_failure(err: &DataLoadError) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(err.user_message());
    }
}

#[component]
pub fn Explorer() -> Element {
    let centers_resource = use_resource(|| async {
        let result = api::fetch_service_centers().await;
        if let Err(err) = &result {
            alert_load_failure(err);
        }
        result
    });

    let page = match &*centers_resource.read() {
        None => rsx! {
            div { class: "app",
                PageHeader {}
                div { class: "loading", "Loading service centers\u{2026}" }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "app",
                PageHeader {}
                LoadError {
                    message: err.user_message().to_string(),
                    detail: err.to_string(),
                }
            }
        },
        Some(Ok(centers)) => rsx! {
            Workspace { centers: centers.clone() }
        },
    };
    page
}

#[component]
fn PageHeader() -> Element {
    rsx! {
        div { class: "header",
            h1 { "Service Center Map" }
        }
    }
}

/// The interactive page, mounted only once the dataset has loaded.
#[component]
fn Workspace(centers: Vec<ServiceCenter>) -> Element {
    let records = use_signal(move || centers);
    let mut ui = use_signal(UiState::default);
    let mut suggestions_open = use_signal(|| false);

    let dispatch = use_callback(move |event: UiEvent| {
        let next = controller::transition(
            &records.read(),
            &ui.read(),
            *suggestions_open.read(),
            event,
        );
        ui.set(next.state);
        suggestions_open.set(next.suggestions_open);
        if let Some(id) = next.focus {
            coords::focus_marker(id);
        }
    });

    // Record-only derivations never change after load
    let regions = use_memo(move || filter::region_options(&records.read()));
    let legend = use_memo(move || brands::legend_entries(&records.read()));

    let state = ui.read().clone();
    let recs = records.read();
    let markers = view::marker_views(&recs, &state);
    let stats = view::stats(&recs, &state);
    let suggestions = view::suggestion_views(&recs, &state);

    // Any click that reaches the page root came from outside the search box
    rsx! {
        div {
            class: "app",
            onclick: move |_| dispatch.call(UiEvent::ClickedOutsideSearch),

            PageHeader {}
            div { class: "workspace",
                div { class: "sidebar",
                    SearchBox {
                        query: state.search_query.clone(),
                        suggestions,
                        open: *suggestions_open.read(),
                        on_event: dispatch,
                    }
                    RegionFilter {
                        regions: regions(),
                        selected: state.selected_state.clone(),
                        on_event: dispatch,
                    }
                    FilterControls {
                        show_support_centers: state.show_support_centers,
                        on_event: dispatch,
                    }
                    StatsPanel { stats }
                    Legend { entries: legend(), on_event: dispatch }
                }
    
                MapView { markers, records, on_event: dispatch }
            }
        }
    }
}
