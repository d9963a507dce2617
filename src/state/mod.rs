//! Application state management

pub mod app_state;
pub mod display;

pub use app_state::{AppState, Notification};
pub use display::{matches_filter, DisplaySet};
