//! Tests for texture codes, brush selections and name parsing

#[cfg(test)]
mod tests {
    use levelgrid::LevelError;
    use levelgrid::spatial::texture::{
        EMPTY_TEXTURE_NAME, Selection, TEXTURE_NAMES, TextureCode, TextureHandle,
    };

    // Tests every code maps to its fixed letter and back
    #[test]
    fn test_letters_are_fixed_per_code() {
        let letters: String = TextureCode::ALL.iter().map(|code| code.letter()).collect();
        assert_eq!(letters, "bdmlw");

        for code in TextureCode::ALL {
            assert_eq!(TextureCode::from_letter(code.letter()), Some(code));
        }
        assert_eq!(TextureCode::from_letter('x'), None);
    }

    // Tests names parse into the matching selection
    #[test]
    fn test_selection_parses_known_names() {
        assert_eq!(
            "medium".parse::<Selection>().ok(),
            Some(Selection::Texture(TextureCode::Medium))
        );
        assert_eq!("empty".parse::<Selection>().ok(), Some(Selection::Empty));
        assert_eq!("delete".parse::<Selection>().ok(), Some(Selection::Delete));
    }

    // Tests an unknown name reports itself and every valid name
    #[test]
    fn test_selection_rejects_unknown_name() {
        match "purple".parse::<Selection>() {
            Err(LevelError::UnknownTexture { name, available }) => {
                assert_eq!(name, "purple");
                assert_eq!(available, TEXTURE_NAMES.to_vec());
            }
            other => unreachable!("Expected UnknownTexture, got {other:?}"),
        }
    }

    // Tests the eraser and empty selections hold no code and look up the empty tile
    #[test]
    fn test_delete_and_empty_store_nothing() {
        for selection in [Selection::Delete, Selection::Empty] {
            assert_eq!(selection.code(), None);
            assert_eq!(selection.texture_name(), EMPTY_TEXTURE_NAME);
        }
        let white = Selection::from(TextureCode::White);
        assert_eq!(white.code(), Some(TextureCode::White));
        assert_eq!(white.texture_name(), "white");
    }

    // Tests luminance snaps to the closest shade with ties going darker
    #[test]
    fn test_nearest_shade() {
        assert_eq!(TextureCode::nearest(0), TextureCode::Black);
        assert_eq!(TextureCode::nearest(31), TextureCode::Black);
        assert_eq!(TextureCode::nearest(96), TextureCode::Dark);
        assert_eq!(TextureCode::nearest(100), TextureCode::Medium);
        assert_eq!(TextureCode::nearest(200), TextureCode::Light);
        assert_eq!(TextureCode::nearest(255), TextureCode::White);
    }

    // Tests handles share one image between clones
    #[test]
    fn test_texture_handle_shares_image() {
        let handle = TextureHandle::new(image::RgbaImage::new(3, 2));
        let copy = handle.clone();
        assert_eq!(copy.image().dimensions(), (3, 2));
        assert!(std::ptr::eq(handle.image(), copy.image()));
    }
}
