//! Application state module

mod app_state;
mod forms;
mod loader_state;
mod submission;
mod tabs;

pub use app_state::*;
pub use forms::*;
pub use loader_state::*;
pub use submission::*;
pub use tabs::*;
