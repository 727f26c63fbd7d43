//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Texture codes and the texture lookup seam
//! - Cells and the columns that hold them
//! - Grid generation and whole-grid operations
//! - Point and rectangle queries

/// Individual cells and columns
pub mod cell;
/// Grid ownership, regeneration and display toggles
pub mod grid;
/// Pixel-space point and rectangle lookups
pub mod query;
/// Texture codes, brush selections and texture lookup
pub mod texture;

pub use cell::{Cell, Column};
pub use grid::Grid;
pub use query::{CellIndex, OutOfRange, Rect};
pub use texture::{Selection, TextureCode};
