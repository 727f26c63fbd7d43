//! Tile grid ownership, regeneration and whole-grid operations
//!
//! The grid stores its cells column-major: `columns[c]` holds every cell whose
//! pixel x coordinate is `c * cell_size`, indexed by row. Changing the cell
//! size or canvas dimensions discards all painted state and rebuilds the
//! tiling from scratch.

use std::fmt;

use crate::io::error::{LevelError, Result, invalid_parameter};
use crate::spatial::cell::{Cell, Column};
use crate::spatial::query::CellIndex;
use crate::spatial::texture::{Selection, TextureLookup};

/// Display toggles that never reach the level file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Dashed gridlines are drawn over the tiling
    pub gridlines_shown: bool,
    /// Empty cells are tinted so they stand out
    pub show_empty_cells: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            gridlines_shown: true,
            show_empty_cells: true,
        }
    }
}

/// Rectangular tiling of paintable cells over a pixel canvas
pub struct Grid {
    lookup: Box<dyn TextureLookup>,
    cell_size: u32,
    canvas_width: u32,
    canvas_height: u32,
    columns: Vec<Column>,
    flags: DisplayFlags,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("cell_size", &self.cell_size)
            .field("canvas_width", &self.canvas_width)
            .field("canvas_height", &self.canvas_height)
            .field("columns", &self.column_count())
            .field("rows", &self.row_count())
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Pixel coordinates `0, step, 2 * step, ...` strictly below `extent`
fn pixel_steps(extent: u32, step: u32) -> Vec<u32> {
    (0..extent).step_by(step as usize).collect()
}

impl Grid {
    /// Create a grid and generate its initial empty tiling
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is zero or the lookup cannot resolve
    /// the empty texture
    pub fn new(
        lookup: impl TextureLookup + 'static,
        cell_size: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self> {
        let mut grid = Self {
            lookup: Box::new(lookup),
            cell_size,
            canvas_width,
            canvas_height,
            columns: Vec::new(),
            flags: DisplayFlags::default(),
        };
        grid.generate(cell_size, canvas_width, canvas_height)?;
        Ok(grid)
    }

    /// Rebuild the tiling with every cell empty
    ///
    /// Painted state is not carried over. Calling this twice with the same
    /// arguments yields the same fresh grid. On error the previous tiling is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is zero or the lookup cannot resolve
    /// the empty texture
    pub fn generate(&mut self, cell_size: u32, canvas_width: u32, canvas_height: u32) -> Result<()> {
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be at least one pixel",
            ));
        }

        let xs = pixel_steps(canvas_width, cell_size);
        let ys = pixel_steps(canvas_height, cell_size);

        let columns = xs
            .iter()
            .map(|&x| Column::new(x, &ys, self.lookup.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        self.cell_size = cell_size;
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        self.columns = columns;

        log::debug!(
            "Generated {}x{} tiling with {cell_size}px cells over {canvas_width}x{canvas_height} canvas",
            self.column_count(),
            self.row_count()
        );
        Ok(())
    }

    /// Pixel side length of every cell
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Canvas width in pixels
    pub const fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Canvas height in pixels
    pub const fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Number of columns, `ceil(canvas_width / cell_size)`
    pub const fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, `ceil(canvas_height / cell_size)`
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or_else(
            || self.canvas_height.div_ceil(self.cell_size) as usize,
            Column::len,
        )
    }

    /// Columns in index order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Texture source used for cell appearances
    pub fn lookup(&self) -> &dyn TextureLookup {
        self.lookup.as_ref()
    }

    /// Cell at `index`, if it exists
    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.columns
            .get(index.column)
            .and_then(|column| column.get(index.row))
    }

    /// Paint the cell at `index`
    ///
    /// # Errors
    ///
    /// Returns [`crate::LevelError::CellOutOfRange`] if no cell exists at
    /// `index`, or a lookup error if the texture cannot be resolved
    pub fn set_cell(&mut self, index: CellIndex, selection: Selection) -> Result<()> {
        let lookup = self.lookup.as_ref();
        let cell = self
            .columns
            .get_mut(index.column)
            .and_then(|column| column.get_mut(index.row))
            .ok_or(LevelError::CellOutOfRange {
                column: index.column,
                row: index.row,
            })?;
        cell.set(selection, lookup)
    }

    /// Paint the cell covering pixel `(x, y)`
    ///
    /// Returns the painted index, or `None` when no cell covers the point.
    ///
    /// # Errors
    ///
    /// Returns a lookup error if the texture cannot be resolved
    pub fn paint_at(&mut self, x: i32, y: i32, selection: Selection) -> Result<Option<CellIndex>> {
        match self.locate_point_index(x, y) {
            Ok(index) => {
                self.set_cell(index, selection)?;
                Ok(Some(index))
            }
            Err(_) => Ok(None),
        }
    }

    /// Empty every cell without touching the geometry
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot resolve the empty texture
    pub fn clear_all(&mut self) -> Result<()> {
        let lookup = self.lookup.as_ref();
        for column in &mut self.columns {
            for cell in column.iter_mut() {
                cell.clear(lookup)?;
            }
        }
        Ok(())
    }

    /// Current display toggles
    pub const fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Show or hide gridlines
    pub const fn toggle_gridlines(&mut self) {
        self.flags.gridlines_shown = !self.flags.gridlines_shown;
    }

    /// Show or hide the empty-cell highlight
    pub const fn toggle_show_empty_cells(&mut self) {
        self.flags.show_empty_cells = !self.flags.show_empty_cells;
    }
}
