//! Tests for cell painting, clearing and column construction

#[cfg(test)]
mod tests {
    use image::Rgba;
    use levelgrid::LevelError;
    use levelgrid::io::atlas::TextureAtlas;
    use levelgrid::spatial::cell::{Cell, Column};
    use levelgrid::spatial::texture::{
        Selection, TextureCode, TextureHandle, TextureLookup, unknown_texture,
    };

    /// Lookup that has no white texture
    struct MissingWhite(TextureAtlas);

    impl TextureLookup for MissingWhite {
        fn get_texture(&self, name: &str) -> levelgrid::Result<TextureHandle> {
            if name == "white" {
                Err(unknown_texture(name))
            } else {
                self.0.get_texture(name)
            }
        }
    }

    // Tests a new cell is empty with no representation
    #[test]
    fn test_new_cell_is_empty() {
        let atlas = TextureAtlas::procedural(2);
        let cell = Cell::new(40, 80, &atlas).unwrap();

        assert_eq!(cell.position(), (40, 80));
        assert!(cell.is_empty());
        assert_eq!(cell.representation(), None);
        assert_eq!(cell.appearance().image().get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    // Tests painting sets the letter and refreshes the appearance
    #[test]
    fn test_set_texture_updates_code_and_appearance() {
        let atlas = TextureAtlas::procedural(2);
        let mut cell = Cell::new(0, 0, &atlas).unwrap();

        cell.set(Selection::Texture(TextureCode::Light), &atlas).unwrap();

        assert_eq!(cell.code(), Some(TextureCode::Light));
        assert_eq!(cell.representation(), Some('l'));
        assert_eq!(
            cell.appearance().image().get_pixel(1, 1),
            &Rgba([192, 192, 192, 255])
        );
    }

    // Tests delete, empty, a missing name and clear all leave the cell empty
    #[test]
    fn test_every_clearing_path_agrees() {
        let atlas = TextureAtlas::procedural(2);
        let mut cell = Cell::new(0, 0, &atlas).unwrap();

        cell.set(Selection::Texture(TextureCode::Black), &atlas).unwrap();
        cell.set(Selection::Delete, &atlas).unwrap();
        assert_eq!(cell.representation(), None);

        cell.set_named(Some("dark"), &atlas).unwrap();
        cell.set_named(None, &atlas).unwrap();
        assert_eq!(cell.representation(), None);

        cell.set_named(Some("dark"), &atlas).unwrap();
        cell.clear(&atlas).unwrap();
        assert!(cell.is_empty());
        assert_eq!(cell.appearance().image().get_pixel(0, 0)[3], 0);
    }

    // Tests an unknown name fails without changing the cell
    #[test]
    fn test_unknown_name_leaves_cell_untouched() {
        let atlas = TextureAtlas::procedural(2);
        let mut cell = Cell::new(0, 0, &atlas).unwrap();
        cell.set_named(Some("black"), &atlas).unwrap();

        let result = cell.set_named(Some("sparkly"), &atlas);

        assert!(matches!(result, Err(LevelError::UnknownTexture { .. })));
        assert_eq!(cell.code(), Some(TextureCode::Black));
    }

    // Tests a failed lookup keeps the previous code and appearance
    #[test]
    fn test_failed_lookup_is_atomic() {
        let lookup = MissingWhite(TextureAtlas::procedural(2));
        let mut cell = Cell::new(0, 0, &lookup).unwrap();
        cell.set(Selection::Texture(TextureCode::Dark), &lookup).unwrap();

        assert!(cell.set(Selection::Texture(TextureCode::White), &lookup).is_err());
        assert_eq!(cell.code(), Some(TextureCode::Dark));
        assert_eq!(cell.appearance().image().get_pixel(0, 0), &Rgba([64, 64, 64, 255]));
    }

    // Tests columns create one empty cell per row at the shared x
    #[test]
    fn test_column_layout() {
        let atlas = TextureAtlas::procedural(2);
        let mut column = Column::new(30, &[0, 10, 20], &atlas).unwrap();

        assert_eq!(column.len(), 3);
        assert_eq!(column.x(), 30);
        let positions: Vec<_> = column.iter().map(Cell::position).collect();
        assert_eq!(positions, vec![(30, 0), (30, 10), (30, 20)]);
        assert_eq!(column.representations(), vec![None, None, None]);

        if let Some(cell) = column.get_mut(1) {
            cell.set(Selection::Texture(TextureCode::White), &atlas).unwrap();
        }
        assert_eq!(column.representations(), vec![None, Some('w'), None]);
        assert!(column.get(3).is_none());
    }
}
