pub mod brands;
pub mod controller;
pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod state;
pub mod tooltip;
pub mod view;
