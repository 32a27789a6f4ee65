use crate::models::CenterId;

/// Everything the user can change about the current view.
///
/// `Default` is the startup value and the value a reset returns to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub search_query: String,
    /// Empty means all states.
    pub selected_state: String,
    pub show_support_centers: bool,
    pub highlighted_id: Option<CenterId>,
    /// Keyboard selection in the suggestion dropdown; `None` when nothing is selected.
    pub suggestion_index: Option<usize>,
}
