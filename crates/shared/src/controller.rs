//! UI event handling as a pure state machine.
//!
//! The page turns DOM events into [`UiEvent`]s, feeds them through
//! [`transition`] together with the current state, stores the result and
//! re-renders. Nothing in here touches the DOM.

use crate::filter::suggest;
use crate::models::{CenterId, ServiceCenter};
use crate::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchInput(String),
    SearchFocused,
    Key(NavKey),
    SuggestionClicked(CenterId),
    ClickedOutsideSearch,
    RegionChanged(String),
    SupportToggled(bool),
    Reset,
    LegendClicked(String),
    MarkerClicked(CenterId),
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: UiState,
    pub suggestions_open: bool,
    /// Marker that should receive keyboard focus after re-render.
    pub focus: Option<CenterId>,
}

impl Transition {
    fn keep(state: &UiState, suggestions_open: bool) -> Self {
        Transition {
            state: state.clone(),
            suggestions_open,
            focus: None,
        }
    }

    fn close_suggestions(&mut self) {
        self.suggestions_open = false;
        self.state.suggestion_index = None;
    }

    fn commit(&mut self, center: &ServiceCenter) {
        self.state.search_query = center.service_center.clone();
        self.state.highlighted_id = Some(center.id);
        self.close_suggestions();
        self.focus = Some(center.id);
    }
}

pub fn transition(
    records: &[ServiceCenter],
    state: &UiState,
    suggestions_open: bool,
    event: UiEvent,
) -> Transition {
    let mut next = Transition::keep(state, suggestions_open);

    match event {
        UiEvent::SearchInput(text) => {
            next.state.search_query = text;
            next.state.suggestion_index = None;
            next.suggestions_open = !next.state.search_query.is_empty();
        }
        UiEvent::SearchFocused => {
            if !state.search_query.is_empty() {
                next.suggestions_open = true;
            }
        }
        UiEvent::Key(NavKey::Escape) => next.close_suggestions(),
        UiEvent::Key(key) => {
            if !suggestions_open {
                return next;
            }
            let rows = suggest(records, &state.search_query, state.show_support_centers);
            let Some(last) = rows.len().checked_sub(1) else {
                return next;
            };
            match key {
                NavKey::Down => {
                    let idx = state.suggestion_index.map_or(0, |i| i + 1);
                    next.state.suggestion_index = Some(idx.min(last));
                }
                NavKey::Up => {
                    let idx = state.suggestion_index.map_or(0, |i| i.saturating_sub(1));
                    next.state.suggestion_index = Some(idx.min(last));
                }
                NavKey::Enter => {
                    if let Some(center) = state.suggestion_index.and_then(|i| rows.get(i)) {
                        next.commit(center);
                    }
                }
                NavKey::Escape => {}
            }
        }
        UiEvent::SuggestionClicked(id) => {
            if let Some(center) = records.iter().find(|c| c.id == id) {
                next.commit(center);
            }
        }
        UiEvent::ClickedOutsideSearch => next.close_suggestions(),
        UiEvent::RegionChanged(region) => {
            next.state.selected_state = region;
            next.state.highlighted_id = None;
        }
        UiEvent::SupportToggled(show) => {
            next.state.show_support_centers = show;
        }
        UiEvent::Reset => {
            next.state = UiState::default();
            next.close_suggestions();
        }
        UiEvent::LegendClicked(brand) => {
            next.state.search_query = brand;
            next.close_suggestions();
        }
        UiEvent::MarkerClicked(id) => {
            next.state.highlighted_id = if state.highlighted_id == Some(id) {
                None
            } else {
                Some(id)
            };
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::visible;
    use crate::normalize::normalize_center;
    use serde_json::json;

    fn sample() -> Vec<ServiceCenter> {
        [
            json!({"serviceCenter": "Durham", "city": "Durham", "state": "NC", "brandName": "Sawyer Exterminating"}),
            json!({"serviceCenter": "Greenville", "city": "Greenville", "state": "SC", "brandName": "Carolina Pest Management"}),
            json!({"serviceCenter": "Knoxville", "city": "Knoxville", "state": "TN", "brandName": "Bug House Pest Control"}),
            json!({"serviceCenter": "HQ", "city": "Raleigh", "state": "NC", "brandName": "Sawyer Exterminating", "isSupportCenter": true}),
        ]
        .iter()
        .enumerate()
        .map(|(i, raw)| normalize_center(raw, i))
        .collect()
    }

    /// Feed events in order, threading state and dropdown visibility.
    fn run(records: &[ServiceCenter], events: Vec<UiEvent>) -> Transition {
        let mut t = Transition::keep(&UiState::default(), false);
        for event in events {
            t = transition(records, &t.state, t.suggestions_open, event);
        }
        t
    }

    #[test]
    fn test_typing_updates_query_and_opens_dropdown() {
        let t = run(&sample(), vec![UiEvent::SearchInput("ville".into())]);
        assert_eq!(t.state.search_query, "ville");
        assert_eq!(t.state.suggestion_index, None);
        assert!(t.suggestions_open);
    }

    #[test]
    fn test_clearing_input_closes_dropdown() {
        let t = run(
            &sample(),
            vec![UiEvent::SearchInput("ville".into()), UiEvent::SearchInput(String::new())],
        );
        assert!(!t.suggestions_open);
        assert_eq!(t.state, UiState::default());
    }

    #[test]
    fn test_typing_resets_keyboard_selection() {
        let t = run(
            &sample(),
            vec![
                UiEvent::SearchInput("ville".into()),
                UiEvent::Key(NavKey::Down),
                UiEvent::SearchInput("villa".into()),
            ],
        );
        assert_eq!(t.state.suggestion_index, None);
    }

    #[test]
    fn test_focus_reopens_only_with_text() {
        let records = sample();
        let empty = transition(&records, &UiState::default(), false, UiEvent::SearchFocused);
        assert!(!empty.suggestions_open);

        let state = UiState { search_query: "dur".into(), ..UiState::default() };
        let t = transition(&records, &state, false, UiEvent::SearchFocused);
        assert!(t.suggestions_open);
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_arrow_keys_clamp_to_list() {
        let records = sample();
        let t = run(
            &records,
            vec![
                UiEvent::SearchInput("ville".into()),
                UiEvent::Key(NavKey::Down),
                UiEvent::Key(NavKey::Down),
                UiEvent::Key(NavKey::Down),
            ],
        );
        assert_eq!(t.state.suggestion_index, Some(1));

        let t = transition(&records, &t.state, true, UiEvent::Key(NavKey::Up));
        let t = transition(&records, &t.state, true, UiEvent::Key(NavKey::Up));
        let t = transition(&records, &t.state, true, UiEvent::Key(NavKey::Up));
        assert_eq!(t.state.suggestion_index, Some(0));
    }

    #[test]
    fn test_arrow_up_from_nothing_selects_first() {
        let t = run(
            &sample(),
            vec![UiEvent::SearchInput("ville".into()), UiEvent::Key(NavKey::Up)],
        );
        assert_eq!(t.state.suggestion_index, Some(0));
    }

    #[test]
    fn test_arrow_keys_ignored_without_matches() {
        let t = run(
            &sample(),
            vec![UiEvent::SearchInput("xyz".into()), UiEvent::Key(NavKey::Down)],
        );
        assert_eq!(t.state.suggestion_index, None);
        assert!(t.suggestions_open);
    }

    #[test]
    fn test_arrow_keys_ignored_when_closed() {
        let t = run(
            &sample(),
            vec![
                UiEvent::SearchInput("ville".into()),
                UiEvent::Key(NavKey::Escape),
                UiEvent::Key(NavKey::Down),
            ],
        );
        assert_eq!(t.state.suggestion_index, None);
    }

    #[test]
    fn test_enter_commits_selected_suggestion() {
        let t = run(
            &sample(),
            vec![
                UiEvent::SearchInput("ville".into()),
                UiEvent::Key(NavKey::Down),
                UiEvent::Key(NavKey::Down),
                UiEvent::Key(NavKey::Enter),
            ],
        );
        assert_eq!(t.state.search_query, "Knoxville");
        assert_eq!(t.state.highlighted_id, Some(3));
        assert_eq!(t.state.suggestion_index, None);
        assert!(!t.suggestions_open);
        assert_eq!(t.focus, Some(3));
    }

    #[test]
    fn test_enter_without_selection_does_nothing() {
        let records = sample();
        let before = run(&records, vec![UiEvent::SearchInput("ville".into())]);
        let t = transition(&records, &before.state, true, UiEvent::Key(NavKey::Enter));
        assert_eq!(t.state, before.state);
        assert!(t.suggestions_open);
        assert_eq!(t.focus, None);
    }

    #[test]
    fn test_clicking_suggestion_commits_it() {
        let t = run(
            &sample(),
            vec![UiEvent::SearchInput("green".into()), UiEvent::SuggestionClicked(2)],
        );
        assert_eq!(t.state.search_query, "Greenville");
        assert_eq!(t.state.highlighted_id, Some(2));
        assert_eq!(t.focus, Some(2));
    }

    #[test]
    fn test_escape_keeps_query_and_highlight() {
        let records = sample();
        let state = UiState {
            search_query: "dur".into(),
            highlighted_id: Some(1),
            suggestion_index: Some(0),
            ..UiState::default()
        };
        let t = transition(&records, &state, true, UiEvent::Key(NavKey::Escape));
        assert!(!t.suggestions_open);
        assert_eq!(t.state.suggestion_index, None);
        assert_eq!(t.state.search_query, "dur");
        assert_eq!(t.state.highlighted_id, Some(1));
    }

    #[test]
    fn test_click_outside_closes() {
        let t = run(
            &sample(),
            vec![UiEvent::SearchInput("ville".into()), UiEvent::ClickedOutsideSearch],
        );
        assert!(!t.suggestions_open);
        assert_eq!(t.state.search_query, "ville");
    }

    #[test]
    fn test_click_outside_clears_keyboard_selection() {
        let t = run(
            &sample(),
            vec![
                UiEvent::MarkerClicked(3),
                UiEvent::SearchInput("ville".into()),
                UiEvent::Key(NavKey::Down),
                UiEvent::ClickedOutsideSearch,
            ],
        );
        assert!(!t.suggestions_open);
        assert_eq!(t.state.suggestion_index, None);
        assert_eq!(t.state.highlighted_id, Some(3));

        // A second click with the dropdown already closed changes nothing
        let again = transition(&sample(), &t.state, false, UiEvent::ClickedOutsideSearch);
        assert_eq!(again, t);
    }

    #[test]
    fn test_region_change_clears_highlight() {
        let t = run(
            &sample(),
            vec![UiEvent::MarkerClicked(1), UiEvent::RegionChanged("SC".into())],
        );
        assert_eq!(t.state.selected_state, "SC");
        assert_eq!(t.state.highlighted_id, None);
    }

    #[test]
    fn test_support_toggle() {
        let t = run(&sample(), vec![UiEvent::SupportToggled(true)]);
        assert!(t.state.show_support_centers);
    }

    #[test]
    fn test_marker_click_toggles_highlight() {
        let records = sample();
        let twice = run(&records, vec![UiEvent::MarkerClicked(2), UiEvent::MarkerClicked(2)]);
        assert_eq!(twice.state.highlighted_id, None);

        let moved = run(&records, vec![UiEvent::MarkerClicked(1), UiEvent::MarkerClicked(3)]);
        assert_eq!(moved.state.highlighted_id, Some(3));
    }

    #[test]
    fn test_legend_click_sets_brand_query() {
        let t = run(
            &sample(),
            vec![
                UiEvent::SearchInput("x".into()),
                UiEvent::LegendClicked("Sawyer Exterminating".into()),
            ],
        );
        assert_eq!(t.state.search_query, "Sawyer Exterminating");
        assert!(!t.suggestions_open);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let records = sample();
        let t = run(
            &records,
            vec![
                UiEvent::SearchInput("ville".into()),
                UiEvent::Key(NavKey::Down),
                UiEvent::RegionChanged("TN".into()),
                UiEvent::SupportToggled(true),
                UiEvent::MarkerClicked(3),
                UiEvent::Reset,
            ],
        );
        assert_eq!(t.state, UiState::default());
        assert!(!t.suggestions_open);

        let shown: Vec<u64> = visible(&records, &t.state).iter().map(|c| c.id).collect();
        let non_support: Vec<u64> = records
            .iter()
            .filter(|c| !c.is_support_center)
            .map(|c| c.id)
            .collect();
        assert_eq!(shown, non_support);
    }
}
