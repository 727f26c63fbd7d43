//! Tile grid model for a greyscale level editor
//!
//! Tracks the painted or empty state of every cell in a rectangular tiling,
//! answers point and rectangle queries in pixel space, rebuilds the tiling
//! when the cell size changes, and serializes the grid into a compact
//! run-length encoded level file.

#![forbid(unsafe_code)]

/// Run-length codec and level text serialization
pub mod codec;
/// Headless editor state driven by an external event loop
pub mod editor;
/// Input/output operations, configuration and error handling
pub mod io;
/// Cells, columns, the grid and its spatial queries
pub mod spatial;

pub use io::error::{LevelError, Result};
