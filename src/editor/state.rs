//! Per-frame editor state owning the grid
//!
//! The surrounding event loop owns one [`Editor`] and drives it through
//! [`Editor::apply`] for key presses and [`Editor::paint_at`] while the mouse
//! button is held. Nothing here draws, blocks or touches global state.

use std::path::{Path, PathBuf};

use crate::editor::command::Command;
use crate::io::configuration::{MAX_ROWS_FOR_SHRINK, MIN_CELL_SIZE};
use crate::io::error::Result;
use crate::io::level::save_level;
use crate::spatial::grid::Grid;
use crate::spatial::query::CellIndex;
use crate::spatial::texture::{Selection, TextureCode};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// State changed in place
    Handled,
    /// The tiling was rebuilt; every cell is empty again
    Regenerated {
        /// New cell size in pixels
        cell_size: u32,
    },
    /// A level name is needed before [`Editor::save`] can run
    SaveRequested,
    /// The command did not apply in the current state
    Ignored,
}

/// Editing session around one grid
#[derive(Debug)]
pub struct Editor {
    grid: Grid,
    selected: Selection,
    levels_dir: PathBuf,
}

impl Editor {
    /// Start editing `grid`, saving levels under `levels_dir`
    pub fn new(grid: Grid, levels_dir: impl Into<PathBuf>) -> Self {
        Self {
            grid,
            selected: Selection::Texture(TextureCode::Black),
            levels_dir: levels_dir.into(),
        }
    }

    /// Grid being edited
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give the grid back, ending the session
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Current brush
    pub const fn selected(&self) -> Selection {
        self.selected
    }

    /// Directory levels are saved to
    pub fn levels_dir(&self) -> &Path {
        &self.levels_dir
    }

    /// Run one command
    ///
    /// # Errors
    ///
    /// Returns an error if clearing or regenerating the grid fails
    pub fn apply(&mut self, command: Command) -> Result<EditorEvent> {
        match command {
            Command::Select(selection) => {
                self.selected = selection;
                Ok(EditorEvent::Handled)
            }
            Command::Save => Ok(EditorEvent::SaveRequested),
            Command::Clear => {
                self.grid.clear_all()?;
                Ok(EditorEvent::Handled)
            }
            Command::ToggleGridlines => {
                self.grid.toggle_gridlines();
                Ok(EditorEvent::Handled)
            }
            Command::ToggleEmptyCells => {
                self.grid.toggle_show_empty_cells();
                Ok(EditorEvent::Handled)
            }
            Command::GrowCells => self.resize(self.grid.cell_size().saturating_add(1)),
            Command::ShrinkCells => {
                let cell_size = self.grid.cell_size();
                if self.grid.row_count() < MAX_ROWS_FOR_SHRINK && cell_size > MIN_CELL_SIZE {
                    self.resize(cell_size - 1)
                } else {
                    Ok(EditorEvent::Ignored)
                }
            }
        }
    }

    /// Run the command bound to `key`; unbound keys are ignored
    ///
    /// # Errors
    ///
    /// Returns an error if the bound command fails
    pub fn press_key(&mut self, key: char) -> Result<EditorEvent> {
        Command::from_key(key).map_or(Ok(EditorEvent::Ignored), |command| self.apply(command))
    }

    fn resize(&mut self, cell_size: u32) -> Result<EditorEvent> {
        let (width, height) = (self.grid.canvas_width(), self.grid.canvas_height());
        self.grid.generate(cell_size, width, height)?;
        Ok(EditorEvent::Regenerated { cell_size })
    }

    /// Paint the current brush into the cell under pixel `(x, y)`
    ///
    /// The eraser empties the cell. Returns `None` when no cell is there.
    ///
    /// # Errors
    ///
    /// Returns an error if the texture lookup fails
    pub fn paint_at(&mut self, x: i32, y: i32) -> Result<Option<CellIndex>> {
        self.grid.paint_at(x, y, self.selected)
    }

    /// Paint `selection` into the cell at `index` without changing the brush
    ///
    /// # Errors
    ///
    /// Returns an error if the index is outside the grid or the texture
    /// lookup fails
    pub fn paint_cell(&mut self, index: CellIndex, selection: Selection) -> Result<()> {
        self.grid.set_cell(index, selection)
    }

    /// Save the grid as `level_name` in the levels directory
    ///
    /// # Errors
    ///
    /// Returns an error if the level cannot be serialized or written
    pub fn save(&self, level_name: &str) -> Result<PathBuf> {
        save_level(&self.grid, &self.levels_dir, level_name)
    }
}
