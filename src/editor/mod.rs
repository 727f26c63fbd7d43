//! Editor state driven by an external frame loop

/// Hot-key command mapping
pub mod command;
/// Editing session owning the grid
pub mod state;

pub use command::Command;
pub use state::{Editor, EditorEvent};
