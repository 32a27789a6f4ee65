pub mod filter_controls;
pub mod legend;
pub mod load_error;
pub mod map_view;
pub mod region_filter;
pub mod search_box;
pub mod stats_panel;
pub mod tooltip_card;
