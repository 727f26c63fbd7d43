//! Texture codes, brush selections and the texture lookup seam
//!
//! A painted cell holds one of five greyscale [`TextureCode`]s. Each code has a
//! fixed single-letter representation used by the level file format, so an
//! unrecognised or missing letter cannot occur for a painted cell.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use image::RgbaImage;

use crate::io::error::{LevelError, Result};

/// Name under which the empty tile is looked up
pub const EMPTY_TEXTURE_NAME: &str = "empty";

/// Name of the eraser brush
pub const DELETE_SELECTION_NAME: &str = "delete";

/// Every name a [`TextureLookup`] is expected to resolve
pub const TEXTURE_NAMES: [&str; 6] = [
    "black",
    "dark",
    "medium",
    "light",
    "white",
    EMPTY_TEXTURE_NAME,
];

/// Paintable greyscale textures, darkest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureCode {
    /// Solid black
    Black,
    /// Dark grey
    Dark,
    /// Medium grey
    Medium,
    /// Light grey
    Light,
    /// Solid white, the background of a level
    White,
}

impl TextureCode {
    /// All codes in atlas order
    pub const ALL: [Self; 5] = [
        Self::Black,
        Self::Dark,
        Self::Medium,
        Self::Light,
        Self::White,
    ];

    /// Letter written to level files for this code
    pub const fn letter(self) -> char {
        match self {
            Self::Black => 'b',
            Self::Dark => 'd',
            Self::Medium => 'm',
            Self::Light => 'l',
            Self::White => 'w',
        }
    }

    /// Texture name used for atlas lookups
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Dark => "dark",
            Self::Medium => "medium",
            Self::Light => "light",
            Self::White => "white",
        }
    }

    /// Code whose letter is `letter`, if any
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.letter() == letter)
    }

    /// Reference grey level (0 = black, 255 = white)
    pub const fn grey_level(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Dark => 64,
            Self::Medium => 128,
            Self::Light => 192,
            Self::White => 255,
        }
    }

    /// Code whose grey level is closest to `luminance`
    ///
    /// Ties resolve towards the darker code.
    pub fn nearest(luminance: u8) -> Self {
        let mut best = Self::Black;
        let mut best_distance = u8::MAX;
        for code in Self::ALL {
            let distance = code.grey_level().abs_diff(luminance);
            if distance < best_distance {
                best = code;
                best_distance = distance;
            }
        }
        best
    }
}

impl fmt::Display for TextureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Brush value chosen in the editor
///
/// `Delete` is a transient UI choice meaning "clear on next paint"; a cell
/// never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Paint this texture
    Texture(TextureCode),
    /// Leave the cell empty
    Empty,
    /// Eraser
    Delete,
}

impl Selection {
    /// Code a cell ends up holding after being painted with this selection
    pub const fn code(self) -> Option<TextureCode> {
        match self {
            Self::Texture(code) => Some(code),
            Self::Empty | Self::Delete => None,
        }
    }

    /// Texture name used to fetch the brush image
    pub const fn texture_name(self) -> &'static str {
        match self {
            Self::Texture(code) => code.name(),
            Self::Empty | Self::Delete => EMPTY_TEXTURE_NAME,
        }
    }
}

impl From<TextureCode> for Selection {
    fn from(code: TextureCode) -> Self {
        Self::Texture(code)
    }
}

impl FromStr for Selection {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self> {
        if s == EMPTY_TEXTURE_NAME {
            return Ok(Self::Empty);
        }
        if s == DELETE_SELECTION_NAME {
            return Ok(Self::Delete);
        }
        TextureCode::ALL
            .into_iter()
            .find(|code| code.name() == s)
            .map(Self::Texture)
            .ok_or_else(|| unknown_texture(s))
    }
}

/// Build the error reported for a name outside [`TEXTURE_NAMES`]
pub fn unknown_texture(name: &str) -> LevelError {
    LevelError::UnknownTexture {
        name: name.to_string(),
        available: TEXTURE_NAMES.to_vec(),
    }
}

/// Shared, immutable image of one texture
#[derive(Debug, Clone)]
pub struct TextureHandle(Arc<RgbaImage>);

impl TextureHandle {
    /// Wrap an image so it can be shared between cells
    pub fn new(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    /// Pixel data of the texture
    pub fn image(&self) -> &RgbaImage {
        &self.0
    }
}

/// Named texture source consulted whenever a cell changes
pub trait TextureLookup {
    /// Fetch the image for `name`
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::UnknownTexture`] if `name` is neither a texture
    /// code name nor [`EMPTY_TEXTURE_NAME`]
    fn get_texture(&self, name: &str) -> Result<TextureHandle>;
}
