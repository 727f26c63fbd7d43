//! Individual grid cells and the columns that hold them

use crate::io::error::Result;
use crate::spatial::texture::{Selection, TextureCode, TextureHandle, TextureLookup};

/// One paintable grid position
///
/// The pixel position is fixed when the owning grid creates the cell. The
/// cached appearance is refreshed from the texture lookup every time the
/// code changes.
#[derive(Debug, Clone)]
pub struct Cell {
    x: u32,
    y: u32,
    code: Option<TextureCode>,
    appearance: TextureHandle,
}

impl Cell {
    /// Create an empty cell at pixel position `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot resolve the empty texture
    pub fn new(x: u32, y: u32, lookup: &dyn TextureLookup) -> Result<Self> {
        let appearance = lookup.get_texture(Selection::Empty.texture_name())?;
        Ok(Self {
            x,
            y,
            code: None,
            appearance,
        })
    }

    /// Pixel position of the cell's top-left corner
    pub const fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Current texture, `None` when empty
    pub const fn code(&self) -> Option<TextureCode> {
        self.code
    }

    /// Whether nothing is painted here
    pub const fn is_empty(&self) -> bool {
        self.code.is_none()
    }

    /// Level file letter; defined exactly when the cell is painted
    pub const fn representation(&self) -> Option<char> {
        match self.code {
            Some(code) => Some(code.letter()),
            None => None,
        }
    }

    /// Image to draw for this cell
    pub const fn appearance(&self) -> &TextureHandle {
        &self.appearance
    }

    /// Paint the cell; `Delete` and `Empty` both clear it
    ///
    /// The cell is left untouched if the lookup fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot resolve the texture
    pub fn set(&mut self, selection: Selection, lookup: &dyn TextureLookup) -> Result<()> {
        let appearance = lookup.get_texture(selection.texture_name())?;
        self.code = selection.code();
        self.appearance = appearance;
        Ok(())
    }

    /// Paint the cell from a texture name; `None` clears it
    ///
    /// # Errors
    ///
    /// Returns [`crate::LevelError::UnknownTexture`] if `name` is not a
    /// texture name, `"empty"` or `"delete"`
    pub fn set_named(&mut self, name: Option<&str>, lookup: &dyn TextureLookup) -> Result<()> {
        let selection = match name {
            Some(name) => name.parse::<Selection>()?,
            None => Selection::Empty,
        };
        self.set(selection, lookup)
    }

    /// Empty the cell
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot resolve the empty texture
    pub fn clear(&mut self, lookup: &dyn TextureLookup) -> Result<()> {
        self.set(Selection::Empty, lookup)
    }
}

/// Cells sharing one x coordinate, indexed by row
#[derive(Debug, Clone)]
pub struct Column {
    x: u32,
    cells: Vec<Cell>,
}

impl Column {
    /// Create a column of empty cells at pixel column `x`, one per entry of `rows`
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup cannot resolve the empty texture
    pub fn new(x: u32, rows: &[u32], lookup: &dyn TextureLookup) -> Result<Self> {
        let cells = rows
            .iter()
            .map(|&y| Cell::new(x, y, lookup))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { x, cells })
    }

    /// Shared pixel x coordinate
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the column holds no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `row`
    pub fn get(&self, row: usize) -> Option<&Cell> {
        self.cells.get(row)
    }

    /// Mutable cell at `row`
    pub fn get_mut(&mut self, row: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)
    }

    /// Cells in row order
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Mutable cells in row order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cell> {
        self.cells.iter_mut()
    }

    /// Representation of every cell in row order
    pub fn representations(&self) -> Vec<Option<char>> {
        self.cells.iter().map(Cell::representation).collect()
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
