//! Tests for atlas loading and texture lookup

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use levelgrid::LevelError;
    use levelgrid::io::atlas::TextureAtlas;
    use levelgrid::io::configuration::ATLAS_TEXTURE_SIZE;
    use levelgrid::spatial::texture::{TEXTURE_NAMES, TextureLookup};

    /// Atlas whose regions are filled with their index in the layout
    fn marked_atlas(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let marker = if y < 40 { x / 40 } else { 10 + x / 40 };
            Rgba([marker as u8, 0, 0, 255])
        })
    }

    // Tests the built-in atlas resolves every texture name
    #[test]
    fn test_procedural_resolves_all_names() {
        let atlas = TextureAtlas::procedural(4);
        for name in TEXTURE_NAMES {
            let texture = atlas.get_texture(name).unwrap();
            assert_eq!(texture.image().dimensions(), (4, 4));
        }
        assert_eq!(atlas.texture_size(), 4);
    }

    // Tests built-in tiles carry their grey level and a transparent empty tile
    #[test]
    fn test_procedural_colours() {
        let atlas = TextureAtlas::procedural(2);
        let pixel = |name: &str| *atlas.get_texture(name).unwrap().image().get_pixel(0, 0);
        assert_eq!(pixel("black"), Rgba([0, 0, 0, 255]));
        assert_eq!(pixel("medium"), Rgba([128, 128, 128, 255]));
        assert_eq!(pixel("white"), Rgba([255, 255, 255, 255]));
        assert_eq!(pixel("empty")[3], 0);
    }

    // Tests unknown names list the available textures
    #[test]
    fn test_unknown_name() {
        let atlas = TextureAtlas::default();
        let error = atlas.get_texture("purple").unwrap_err();
        assert!(matches!(error, LevelError::UnknownTexture { ref name, .. } if name == "purple"));
        assert!(error.to_string().contains("black, dark, medium, light, white, empty"));
    }

    // Tests regions are cropped from their layout positions
    // Verified by swapping the empty tile row
    #[test]
    fn test_from_image_crops_layout() {
        let atlas = TextureAtlas::from_image(&marked_atlas(200, 80), 40).unwrap();
        let marker = |name: &str| atlas.get_texture(name).unwrap().image().get_pixel(39, 39)[0];
        assert_eq!(marker("black"), 0);
        assert_eq!(marker("dark"), 1);
        assert_eq!(marker("light"), 3);
        assert_eq!(marker("white"), 4);
        assert_eq!(marker("empty"), 10);
    }

    // Tests an undersized atlas names the first missing region
    #[test]
    fn test_from_image_too_small() {
        let narrow = TextureAtlas::from_image(&marked_atlas(199, 80), 40);
        assert!(matches!(
            narrow,
            Err(LevelError::AtlasRegion { name: "white", x: 160, y: 0, size: 40 })
        ));

        let short = TextureAtlas::from_image(&marked_atlas(200, 79), 40);
        assert!(matches!(short, Err(LevelError::AtlasRegion { name: "empty", .. })));
    }

    // Tests atlas files load through the image crate
    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.png");
        marked_atlas(200, 80).save(&path).unwrap();

        let atlas = TextureAtlas::from_path(&path).unwrap();

        assert_eq!(atlas.texture_size(), ATLAS_TEXTURE_SIZE);
        let dark = atlas.get_texture("dark").unwrap();
        assert_eq!(dark.image().get_pixel(0, 0)[0], 1);
    }

    // Tests a missing atlas file is an image load error
    #[test]
    fn test_from_missing_path() {
        let result = TextureAtlas::from_path(std::path::Path::new("/nonexistent/atlas.png"));
        assert!(matches!(result, Err(LevelError::ImageLoad { .. })));
    }
}
