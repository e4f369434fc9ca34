//! Reusable UI components

mod button;
mod dialog;

pub use button::{checkbox_line, render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
