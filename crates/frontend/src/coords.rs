use servicemap_shared::models::CenterId;
use servicemap_shared::tooltip::{self, Placement};
use wasm_bindgen::JsCast;

pub const MAP_CONTAINER_ID: &str = "map-container";

/// DOM id of the marker for `id`, used for focus and geometry lookups.
pub fn marker_dom_id(id: CenterId) -> String {
    format!("marker-{id}")
}

/// Convert client (viewport) coordinates to container-relative pixel coordinates.
pub fn client_to_container(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Place the tooltip for a rendered marker. `None` if either element is missing.
pub fn tooltip_placement(id: CenterId) -> Option<Placement> {
    let container = element_by_id(MAP_CONTAINER_ID)?.get_bounding_client_rect();
    let marker = element_by_id(&marker_dom_id(id))?.get_bounding_client_rect();

    let (x, y) = client_to_container(marker.left(), marker.top(), container.left(), container.top());
    Some(tooltip::place(x, y, container.width(), container.height()))
}

/// Move keyboard focus to a marker; a missing marker is skipped.
pub fn focus_marker(id: CenterId) {
    let Some(marker) = element_by_id(&marker_dom_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        tracing::debug!(id, "No marker element to focus");
        return;
    };
    let _ = marker.focus();
}
