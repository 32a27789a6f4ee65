//! Projection of records and UI state into what the page draws.

use std::collections::HashSet;

use crate::brands::{brand_css_class, brand_short_name};
use crate::filter::{eligible, suggest, visible};
use crate::models::{CenterId, ServiceCenter};
use crate::state::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub id: CenterId,
    pub aria_label: String,
    pub brand_class: String,
    pub left_percent: f64,
    pub top_percent: f64,
    /// Eligible but filtered out by search or region.
    pub dimmed: bool,
    pub highlighted: bool,
}

impl MarkerView {
    /// Dimmed markers stay focusable by pointer but leave the tab order.
    pub fn tab_index(&self) -> i32 {
        if self.dimmed {
            -1
        } else {
            0
        }
    }

    pub fn class_list(&self) -> String {
        let mut class = format!("marker {}", self.brand_class);
        if self.dimmed {
            class.push_str(" is-dim");
        }
        if self.highlighted {
            class.push_str(" is-highlighted is-active");
        }
        class
    }
}

/// One marker per eligible record, in input order.
pub fn marker_views(records: &[ServiceCenter], state: &UiState) -> Vec<MarkerView> {
    let matched: HashSet<CenterId> = visible(records, state).iter().map(|c| c.id).collect();
    eligible(records, state.show_support_centers)
        .into_iter()
        .map(|c| MarkerView {
            id: c.id,
            aria_label: format!(
                "{}, {}, {}",
                c.service_center,
                c.city.as_deref().unwrap_or_default(),
                c.state.as_deref().unwrap_or_default()
            ),
            brand_class: brand_css_class(&c.brand_name),
            left_percent: c.position.x_percent,
            top_percent: c.position.y_percent,
            dimmed: !matched.contains(&c.id),
            highlighted: state.highlighted_id == Some(c.id),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub visible_count: usize,
    /// Distinct non-empty `state` values among the visible records.
    pub state_count: usize,
}

pub fn stats(records: &[ServiceCenter], state: &UiState) -> Stats {
    let shown = visible(records, state);
    let states: HashSet<&str> = shown
        .iter()
        .filter_map(|c| c.state.as_deref())
        .filter(|s| !s.is_empty())
        .collect();
    Stats {
        visible_count: shown.len(),
        state_count: states.len(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub address: String,
    pub region_label: String,
    pub branch_label: Option<String>,
    pub brand_name: String,
    pub brand_class: String,
    pub is_support_center: bool,
}

impl TooltipContent {
    /// Region and branch joined for the secondary line.
    pub fn detail_line(&self) -> String {
        match &self.branch_label {
            Some(branch) => format!("{} • {}", self.region_label, branch),
            None => self.region_label.clone(),
        }
    }
}

pub fn tooltip_content(center: &ServiceCenter) -> TooltipContent {
    let region_label = match &center.region {
        Some(region) => format!("Region {}", region),
        None => "Region N/A".to_string(),
    };
    let branch_label = center
        .branch_number
        .as_ref()
        .filter(|b| !b.is_blank())
        .map(|b| format!("Branch #{}", b));
    TooltipContent {
        title: center.service_center.clone(),
        address: center.full_address.clone().unwrap_or_default(),
        region_label,
        branch_label,
        brand_name: center.brand_name.clone(),
        brand_class: brand_css_class(&center.brand_name),
        is_support_center: center.is_support_center,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionView {
    pub id: CenterId,
    pub title: String,
    pub subtitle: String,
    pub brand_tag: String,
    pub brand_class: String,
    pub selected: bool,
}

/// Dropdown rows for the current query. Empty means "no matches".
pub fn suggestion_views(records: &[ServiceCenter], state: &UiState) -> Vec<SuggestionView> {
    suggest(records, &state.search_query, state.show_support_centers)
        .into_iter()
        .enumerate()
        .map(|(idx, c)| SuggestionView {
            id: c.id,
            title: c.service_center.clone(),
            subtitle: format!(
                "{}, {}",
                c.city.as_deref().unwrap_or_default(),
                c.state.as_deref().unwrap_or_default()
            ),
            brand_tag: brand_short_name(&c.brand_name).to_string(),
            brand_class: brand_css_class(&c.brand_name),
            selected: state.suggestion_index == Some(idx),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_center;
    use serde_json::json;

    fn sample() -> Vec<ServiceCenter> {
        [
            json!({"serviceCenter": "Durham", "city": "Durham", "state": "NC", "brandName": "Sawyer Exterminating", "position": {"xPercent": 61.5, "yPercent": 40.0}}),
            json!({"serviceCenter": "Greenville", "city": "Greenville", "state": "SC", "brandName": "Carolina Pest Management"}),
            json!({"serviceCenter": "Knoxville", "city": "Knoxville", "state": "TN", "brandName": "Bug House Pest Control"}),
            json!({"serviceCenter": "Charlotte", "city": "Charlotte", "state": "NC", "brandName": "Sawyer Exterminating"}),
            json!({"serviceCenter": "HQ", "city": "Raleigh", "state": "VA", "brandName": "Sawyer Exterminating", "isSupportCenter": true}),
        ]
        .iter()
        .enumerate()
        .map(|(i, raw)| normalize_center(raw, i))
        .collect()
    }

    #[test]
    fn test_markers_cover_eligible_records_only() {
        let records = sample();
        let views = marker_views(&records, &UiState::default());
        assert_eq!(views.len(), 4);
        let shown = UiState { show_support_centers: true, ..UiState::default() };
        assert_eq!(marker_views(&records, &shown).len(), 5);
    }

    #[test]
    fn test_filtered_out_markers_are_dimmed_not_removed() {
        let records = sample();
        let state = UiState { selected_state: "NC".into(), ..UiState::default() };
        let views = marker_views(&records, &state);
        let dimmed: Vec<u64> = views.iter().filter(|m| m.dimmed).map(|m| m.id).collect();
        assert_eq!(views.len(), 4);
        assert_eq!(dimmed, vec![2, 3]);
        assert!(views.iter().filter(|m| m.dimmed).all(|m| m.tab_index() == -1));
        assert!(views.iter().filter(|m| !m.dimmed).all(|m| m.tab_index() == 0));
    }

    #[test]
    fn test_marker_position_and_classes() {
        let records = sample();
        let state = UiState { highlighted_id: Some(1), search_query: "zzz".into(), ..UiState::default() };
        let m = &marker_views(&records, &state)[0];
        assert_eq!(m.left_percent, 61.5);
        assert_eq!(m.top_percent, 40.0);
        assert_eq!(m.aria_label, "Durham, Durham, NC");
        assert_eq!(
            m.class_list(),
            "marker brand--Sawyer_Exterminating is-dim is-highlighted is-active"
        );
    }

    #[test]
    fn test_at_most_one_marker_highlighted() {
        let records = sample();
        let state = UiState { highlighted_id: Some(3), ..UiState::default() };
        let highlighted: Vec<u64> = marker_views(&records, &state)
            .iter()
            .filter(|m| m.highlighted)
            .map(|m| m.id)
            .collect();
        assert_eq!(highlighted, vec![3]);
    }

    #[test]
    fn test_stats_match_visible_set() {
        let records = sample();
        let states = [
            UiState::default(),
            UiState { selected_state: "NC".into(), ..UiState::default() },
            UiState { search_query: "ville".into(), ..UiState::default() },
            UiState { show_support_centers: true, ..UiState::default() },
            UiState { search_query: "nothing".into(), ..UiState::default() },
        ];
        for state in &states {
            let shown = visible(&records, state);
            let distinct: HashSet<&str> = shown.iter().filter_map(|c| c.state.as_deref()).collect();
            let s = stats(&records, state);
            assert_eq!(s.visible_count, shown.len());
            assert_eq!(s.state_count, distinct.len());
        }
    }

    #[test]
    fn test_stats_default_counts() {
        let s = stats(&sample(), &UiState::default());
        assert_eq!(s, Stats { visible_count: 4, state_count: 3 });
    }

    #[test]
    fn test_stats_ignore_missing_state() {
        let records = vec![
            normalize_center(&json!({"serviceCenter": "A"}), 0),
            normalize_center(&json!({"serviceCenter": "B", "state": ""}), 1),
        ];
        let s = stats(&records, &UiState::default());
        assert_eq!(s, Stats { visible_count: 2, state_count: 0 });
    }

    #[test]
    fn test_tooltip_without_region_or_branch() {
        let c = normalize_center(&json!({"serviceCenter": "Durham", "fullAddress": "1 Main St", "brandName": "Sawyer Exterminating"}), 0);
        let t = tooltip_content(&c);
        assert_eq!(t.title, "Durham");
        assert_eq!(t.address, "1 Main St");
        assert_eq!(t.region_label, "Region N/A");
        assert!(t.branch_label.is_none());
        assert_eq!(t.detail_line(), "Region N/A");
        assert_eq!(t.brand_class, "brand--Sawyer_Exterminating");
        assert!(!t.is_support_center);
    }

    #[test]
    fn test_tooltip_with_region_and_branch() {
        let c = normalize_center(&json!({"region": 4, "branchNumber": 112, "isSupportCenter": true}), 0);
        let t = tooltip_content(&c);
        assert_eq!(t.region_label, "Region 4");
        assert_eq!(t.branch_label.as_deref(), Some("Branch #112"));
        assert_eq!(t.detail_line(), "Region 4 • Branch #112");
        assert!(t.is_support_center);
    }

    #[test]
    fn test_tooltip_region_zero_is_present_but_branch_zero_is_omitted() {
        let c = normalize_center(&json!({"region": 0, "branchNumber": 0}), 0);
        let t = tooltip_content(&c);
        assert_eq!(t.region_label, "Region 0");
        assert!(t.branch_label.is_none());
    }

    #[test]
    fn test_suggestion_rows() {
        let records = sample();
        let state = UiState { search_query: "ville".into(), suggestion_index: Some(1), ..UiState::default() };
        let rows = suggestion_views(&records, &state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Greenville");
        assert_eq!(rows[0].subtitle, "Greenville, SC");
        assert_eq!(rows[0].brand_tag, "Carolina");
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
    }
}
