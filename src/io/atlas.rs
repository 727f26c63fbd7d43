//! Texture atlas: named square crops of a single atlas image

use std::collections::HashMap;
use std::path::Path;

use image::{GenericImageView, Rgba, RgbaImage};

use crate::io::configuration::ATLAS_TEXTURE_SIZE;
use crate::io::error::{LevelError, Result};
use crate::spatial::texture::{
    EMPTY_TEXTURE_NAME, TextureCode, TextureHandle, TextureLookup, unknown_texture,
};

/// Top-left corner of each texture region, in units of the texture size
const ATLAS_LAYOUT: [(&str, u32, u32); 6] = [
    ("black", 0, 0),
    ("dark", 1, 0),
    ("medium", 2, 0),
    ("light", 3, 0),
    ("white", 4, 0),
    (EMPTY_TEXTURE_NAME, 0, 1),
];

/// Texture lookup backed by pre-cropped atlas regions
#[derive(Debug, Clone)]
pub struct TextureAtlas {
    textures: HashMap<&'static str, TextureHandle>,
    texture_size: u32,
}

impl TextureAtlas {
    /// Load an atlas image and crop every texture region from it
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded or is too small to hold
    /// every region
    pub fn from_path(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| LevelError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded texture atlas '{}'", path.display());
        Self::from_image(&img.to_rgba8(), ATLAS_TEXTURE_SIZE)
    }

    /// Crop `size`-pixel regions out of an in-memory atlas
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::AtlasRegion`] if a region falls outside the image
    pub fn from_image(atlas: &RgbaImage, size: u32) -> Result<Self> {
        let (width, height) = atlas.dimensions();
        let mut textures = HashMap::with_capacity(ATLAS_LAYOUT.len());
        for (name, col, row) in ATLAS_LAYOUT {
            let (x, y) = (col * size, row * size);
            if x + size > width || y + size > height {
                return Err(LevelError::AtlasRegion { name, x, y, size });
            }
            let region = atlas.view(x, y, size, size).to_image();
            textures.insert(name, TextureHandle::new(region));
        }
        Ok(Self {
            textures,
            texture_size: size,
        })
    }

    /// Flat grey tiles and a transparent empty tile, no atlas file needed
    pub fn procedural(size: u32) -> Self {
        let mut textures = HashMap::with_capacity(ATLAS_LAYOUT.len());
        for code in TextureCode::ALL {
            let grey = code.grey_level();
            let tile = RgbaImage::from_pixel(size, size, Rgba([grey, grey, grey, 255]));
            textures.insert(code.name(), TextureHandle::new(tile));
        }
        textures.insert(
            EMPTY_TEXTURE_NAME,
            TextureHandle::new(RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))),
        );
        Self {
            textures,
            texture_size: size,
        }
    }

    /// Side length of every texture in pixels
    pub const fn texture_size(&self) -> u32 {
        self.texture_size
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self::procedural(ATLAS_TEXTURE_SIZE)
    }
}

impl TextureLookup for TextureAtlas {
    fn get_texture(&self, name: &str) -> Result<TextureHandle> {
        self.textures
            .get(name)
            .cloned()
            .ok_or_else(|| unknown_texture(name))
    }
}
