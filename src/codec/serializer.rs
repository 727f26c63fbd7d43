//! Level text generation: trim, transpose, encode and header
//!
//! Cells are stored column-major, but the level format lists them row by row.
//! The conversion goes through an explicit representation matrix of shape
//! `(columns, rows)` so the storage order never leaks into the file format.

use ndarray::{Array2, ArrayView2, Axis, Slice};

use crate::codec::run_length::{Token, encode_run_length};
use crate::io::configuration::HEADER_WIDTH;
use crate::io::error::{Result, computation_error};
use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;
use crate::spatial::texture::TextureCode;

/// Representation of a single cell; `None` for an empty cell
pub type Representation = Option<char>;

/// Serialized form of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePayload {
    /// Complete level text: header followed by every token
    pub text: String,
    /// Columns kept after trimming, as written to the header
    pub width: usize,
    /// Tokens in file order
    pub tokens: Vec<Token<char>>,
}

/// Column-major matrix of cell representations, shape `(columns, rows)`
///
/// # Errors
///
/// Returns an error if the columns do not all have the same length
pub fn representation_matrix(grid: &Grid) -> Result<Array2<Representation>> {
    let flat: Vec<Representation> = grid
        .columns()
        .iter()
        .flat_map(|column| column.iter().map(Cell::representation))
        .collect();
    Array2::from_shape_vec((grid.column_count(), grid.row_count()), flat)
        .map_err(|e| computation_error("representation matrix", &e))
}

/// Drop trailing columns made up entirely of the white letter
///
/// Keeps every column up to and including the last one that is not all
/// white. When every column is white nothing is kept. Trimming an already
/// trimmed matrix changes nothing.
pub fn trim_trailing_white(matrix: ArrayView2<'_, Representation>) -> Array2<Representation> {
    let white = Some(TextureCode::White.letter());
    let keep = matrix
        .outer_iter()
        .rposition(|column| column.iter().any(|value| *value != white))
        .map_or(0, |last| last + 1);
    matrix.slice_axis(Axis(0), Slice::from(..keep)).to_owned()
}

/// Flatten a `(columns, rows)` matrix row by row
///
/// Row 0 of every column comes first, then row 1, and so on.
pub fn transpose_row_major(matrix: ArrayView2<'_, Representation>) -> Vec<Representation> {
    matrix.t().iter().copied().collect()
}

/// Level header: `width` zero-padded to at least two digits
pub fn format_header(width: usize) -> String {
    format!("{width:0digits$}", digits = HEADER_WIDTH)
}

/// Build the level text for `grid`
///
/// Empty cells take part in run grouping but write no token. A grid that is
/// entirely white (or has no columns) saves as an empty level, `"00"`.
///
/// # Errors
///
/// Returns an error if the representation matrix cannot be built
pub fn build_save_payload(grid: &Grid) -> Result<SavePayload> {
    let matrix = representation_matrix(grid)?;
    let trimmed = trim_trailing_white(matrix.view());
    let width = trimmed.nrows();
    if width == 0 {
        log::warn!("Level has no columns left after trimming white; saving an empty level");
    }

    let flattened = transpose_row_major(trimmed.view());
    let tokens: Vec<Token<char>> = encode_run_length(&flattened)
        .into_iter()
        .filter_map(|token| token.value.map(|letter| Token::new(letter, token.count)))
        .collect();

    let mut text = format_header(width);
    for token in &tokens {
        text.push_str(&token.to_string());
    }

    Ok(SavePayload {
        text,
        width,
        tokens,
    })
}
