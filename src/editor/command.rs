//! Hot-key commands understood by the editor

use crate::spatial::texture::{Selection, TextureCode};

/// One editor action triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Choose the brush used by later paints
    Select(Selection),
    /// Ask the surrounding loop for a level name and save
    Save,
    /// Empty every cell
    Clear,
    /// Show or hide gridlines
    ToggleGridlines,
    /// Show or hide the empty-cell highlight
    ToggleEmptyCells,
    /// Enlarge cells by one pixel and rebuild the tiling
    GrowCells,
    /// Shrink cells by one pixel and rebuild the tiling
    ShrinkCells,
}

impl Command {
    /// Command bound to `key`, if any
    pub const fn from_key(key: char) -> Option<Self> {
        let command = match key {
            '1' => Self::Select(Selection::Texture(TextureCode::Black)),
            '2' => Self::Select(Selection::Texture(TextureCode::Dark)),
            '3' => Self::Select(Selection::Texture(TextureCode::Medium)),
            '4' => Self::Select(Selection::Texture(TextureCode::Light)),
            '5' => Self::Select(Selection::Texture(TextureCode::White)),
            'e' => Self::Select(Selection::Delete),
            's' => Self::Save,
            'c' => Self::Clear,
            'g' => Self::ToggleGridlines,
            'q' => Self::ToggleEmptyCells,
            '=' => Self::GrowCells,
            '-' => Self::ShrinkCells,
            _ => return None,
        };
        Some(command)
    }
}
