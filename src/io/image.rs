//! Image conversion into grids and PNG preview export

use std::collections::HashMap;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::io::configuration::{EMPTY_CELL_TINT, GRIDLINE_COLOR, OPAQUE_ALPHA_THRESHOLD};
use crate::io::error::{LevelError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::query::CellIndex;
use crate::spatial::texture::{Selection, TextureCode};

/// Load a source image as RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| LevelError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Brush matching one source pixel
///
/// Mostly transparent pixels erase; everything else picks the shade nearest
/// the pixel's luminance.
pub fn quantize_pixel(pixel: Rgba<u8>) -> Selection {
    let [r, g, b, a] = pixel.0;
    if a < OPAQUE_ALPHA_THRESHOLD {
        return Selection::Delete;
    }
    // ITU-R BT.601 luma weights, scaled by 1000
    let luma = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    Selection::Texture(TextureCode::nearest(luma.min(255) as u8))
}

/// Pixel sampled for the cell starting at `origin` along one axis
const fn sample_coordinate(origin: u32, cell_size: u32, extent: u32) -> u32 {
    let centre = origin + cell_size / 2;
    if centre < extent { centre } else { extent - 1 }
}

/// Brush for every cell of `grid`, sampled at the cell centres of `source`
///
/// `source` is expected to match the grid's canvas; cells outside the image
/// erase.
pub fn selections_from_image(grid: &Grid, source: &RgbaImage) -> Vec<(CellIndex, Selection)> {
    let (width, height) = source.dimensions();
    let mut selections = Vec::with_capacity(grid.column_count() * grid.row_count());
    for (column, cells) in grid.columns().iter().enumerate() {
        let x = cells.x();
        for (row, cell) in cells.iter().enumerate() {
            let (_, y) = cell.position();
            let selection = if x < width && y < height {
                let px = sample_coordinate(x, grid.cell_size(), width);
                let py = sample_coordinate(y, grid.cell_size(), height);
                source
                    .get_pixel_checked(px, py)
                    .map_or(Selection::Delete, |pixel| quantize_pixel(*pixel))
            } else {
                Selection::Delete
            };
            selections.push((CellIndex::new(column, row), selection));
        }
    }
    selections
}

/// Draw dashed gridlines every `cell_size` pixels
fn draw_gridlines(img: &mut RgbaImage, cell_size: u32) {
    let (width, height) = img.dimensions();
    let dash = (cell_size / 4).max(1);
    let gap = (cell_size / 2).max(1) as usize;
    let color = Rgba(GRIDLINE_COLOR);

    for y in (0..height).step_by(cell_size as usize) {
        for start in ((cell_size / 8)..width).step_by(gap) {
            for x in start..(start + dash).min(width) {
                img.put_pixel(x, y, color);
            }
        }
    }
    for x in (0..width).step_by(cell_size as usize) {
        for start in ((cell_size / 8)..height).step_by(gap) {
            for y in start..(start + dash).min(height) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Render `grid` as it would appear in the editor
///
/// Painted cells show their texture scaled to the cell size. Empty cells are
/// transparent, or tinted when the empty-cell highlight is on. Gridlines are
/// drawn when enabled.
pub fn render_grid(grid: &Grid) -> RgbaImage {
    let size = grid.cell_size();
    let mut img = RgbaImage::new(grid.canvas_width(), grid.canvas_height());
    let flags = grid.flags();
    let tint = RgbaImage::from_pixel(size, size, Rgba(EMPTY_CELL_TINT));
    let mut scaled: HashMap<TextureCode, RgbaImage> = HashMap::new();

    for column in grid.columns() {
        for cell in column {
            let (x, y) = cell.position();
            match cell.code() {
                Some(code) => {
                    let tile = scaled.entry(code).or_insert_with(|| {
                        imageops::resize(cell.appearance().image(), size, size, FilterType::Nearest)
                    });
                    imageops::overlay(&mut img, tile, i64::from(x), i64::from(y));
                }
                None if flags.show_empty_cells => {
                    imageops::overlay(&mut img, &tint, i64::from(x), i64::from(y));
                }
                None => {}
            }
        }
    }

    if flags.gridlines_shown {
        draw_gridlines(&mut img, size);
    }
    img
}

/// Render `grid` and save it as a PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    let img = render_grid(grid);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LevelError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| LevelError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
