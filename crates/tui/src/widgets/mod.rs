//! Widgets for the suggest-kit TUI.

pub mod input_line;
pub mod popup;

pub use input_line::render_input_line;
pub use popup::SuggestionPopup;
