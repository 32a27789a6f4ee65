use std::collections::BTreeSet;

use crate::models::ServiceCenter;
use crate::state::UiState;

/// Maximum number of rows in the type-ahead dropdown.
pub const SUGGESTION_LIMIT: usize = 10;

/// Support centers are hidden unless the toggle is on.
pub fn passes_support_gate(center: &ServiceCenter, show_support_centers: bool) -> bool {
    !center.is_support_center || show_support_centers
}

/// Exact, case-sensitive match on the `state` field; an empty selection passes everything.
pub fn passes_region_gate(center: &ServiceCenter, selected_state: &str) -> bool {
    selected_state.is_empty() || center.state.as_deref() == Some(selected_state)
}

/// Case-insensitive substring match on display name, city, or brand.
///
/// An empty query matches. Whitespace is significant.
pub fn matches_query(center: &ServiceCenter, query: &str) -> bool {
    query.is_empty() || matches_lowered(center, &query.to_lowercase())
}

fn matches_lowered(center: &ServiceCenter, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&center.service_center)
        || contains(center.city.as_deref().unwrap_or_default())
        || contains(&center.brand_name)
}

/// Records passing all three gates, in input order.
pub fn visible<'a>(records: &'a [ServiceCenter], state: &UiState) -> Vec<&'a ServiceCenter> {
    let needle = state.search_query.to_lowercase();
    records
        .iter()
        .filter(|c| passes_support_gate(c, state.show_support_centers))
        .filter(|c| passes_region_gate(c, &state.selected_state))
        .filter(|c| needle.is_empty() || matches_lowered(c, &needle))
        .collect()
}

/// Records that get a marker at all: only the support gate applies, so
/// records failing the search or region filters stay on the map dimmed.
pub fn eligible(records: &[ServiceCenter], show_support_centers: bool) -> Vec<&ServiceCenter> {
    records
        .iter()
        .filter(|c| passes_support_gate(c, show_support_centers))
        .collect()
}

/// Type-ahead matches for `query`, capped at [`SUGGESTION_LIMIT`].
///
/// Ignores the region selection. An empty query yields nothing.
pub fn suggest<'a>(
    records: &'a [ServiceCenter],
    query: &str,
    show_support_centers: bool,
) -> Vec<&'a ServiceCenter> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|c| passes_support_gate(c, show_support_centers))
        .filter(|c| matches_lowered(c, &needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}

/// Distinct non-empty `state` values, sorted ascending.
pub fn region_options(records: &[ServiceCenter]) -> Vec<String> {
    records
        .iter()
        .filter_map(|c| c.state.as_deref())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
