//! Point and rectangle lookups from pixel space to grid cells
//!
//! A query that lands outside the tiling returns [`OutOfRange`] rather than
//! failing: callers treat it as "no cell here". Negative pixel coordinates are
//! always out of range and never wrap onto a valid cell.

use std::fmt;

use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Column number, counted from the left edge
    pub column: usize,
    /// Row number, counted from the top edge
    pub row: usize,
}

impl CellIndex {
    /// Index of the cell at `column`, `row`
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Outcome of a query that does not land on the tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange;

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("query lies outside the grid")
    }
}

impl std::error::Error for OutOfRange {}

/// Axis-aligned pixel rectangle
///
/// `right` and `bottom` are `left + width` and `top + height`, and both
/// corners are resolved inclusively, so a rectangle whose edge sits exactly on
/// a cell boundary also covers the next cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge in pixels
    pub left: i32,
    /// Top edge in pixels
    pub top: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Rectangle with top-left corner `(left, top)`
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge in pixels
    pub const fn right(&self) -> i32 {
        self.left.saturating_add_unsigned(self.width)
    }

    /// Bottom edge in pixels
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add_unsigned(self.height)
    }
}

// Floor division for the non-negative half of an axis
fn axis_index(coordinate: i32, cell_size: u32) -> Option<usize> {
    u32::try_from(coordinate)
        .ok()
        .map(|pixel| (pixel / cell_size) as usize)
}

impl Grid {
    /// Index of the cell covering pixel `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if either coordinate is negative or beyond the
    /// last column or row
    pub fn locate_point_index(&self, x: i32, y: i32) -> Result<CellIndex, OutOfRange> {
        let column = axis_index(x, self.cell_size()).ok_or(OutOfRange)?;
        let row = axis_index(y, self.cell_size()).ok_or(OutOfRange)?;
        let index = CellIndex::new(column, row);
        if column < self.column_count() && row < self.row_count() {
            Ok(index)
        } else {
            Err(OutOfRange)
        }
    }

    /// Cell covering pixel `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if no cell covers the point
    pub fn locate_point(&self, x: i32, y: i32) -> Result<&Cell, OutOfRange> {
        let index = self.locate_point_index(x, y)?;
        self.cell(index).ok_or(OutOfRange)
    }

    /// Indices of every cell between the rectangle's corner cells
    ///
    /// Enumeration is column-major: the column varies in the outer loop and
    /// the row in the inner loop.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if either corner lies outside the grid; no
    /// partial list is produced
    pub fn locate_rect_indices(&self, rect: Rect) -> Result<Vec<CellIndex>, OutOfRange> {
        let top_left = self.locate_point_index(rect.left, rect.top)?;
        let bottom_right = self.locate_point_index(rect.right(), rect.bottom())?;

        let rows = top_left.row..=bottom_right.row;
        Ok((top_left.column..=bottom_right.column)
            .flat_map(|column| rows.clone().map(move |row| CellIndex::new(column, row)))
            .collect())
    }

    /// Every cell between the rectangle's corner cells, column-major
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if any covered index lies outside the grid
    pub fn locate_rect(&self, rect: Rect) -> Result<Vec<&Cell>, OutOfRange> {
        self.locate_rect_indices(rect)?
            .into_iter()
            .map(|index| self.cell(index).ok_or(OutOfRange))
            .collect()
    }
}
