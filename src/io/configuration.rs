//! Editor constants and runtime configuration defaults

// Tiling geometry
/// Cell side length in pixels when the editor starts
pub const INITIAL_CELL_SIZE: u32 = 40;
/// Smallest cell side length the editor will shrink to
pub const MIN_CELL_SIZE: u32 = 1;
/// Canvas width used when no source image dictates one
pub const DEFAULT_CANVAS_WIDTH: u32 = 560;
/// Canvas height used when no source image dictates one
pub const DEFAULT_CANVAS_HEIGHT: u32 = 560;

// Shrinking past this many rows makes the tiling too dense to paint
/// Row count at which the cell size may no longer be decreased
pub const MAX_ROWS_FOR_SHRINK: usize = 90;

// Atlas layout
/// Side length of each texture region in the atlas image
pub const ATLAS_TEXTURE_SIZE: u32 = 40;

// Level file format
/// Largest count a single run-length token may carry
pub const MAX_RUN_COUNT: usize = 9;
/// Minimum number of digits in the level header
pub const HEADER_WIDTH: usize = 2;
/// Directory that level files are written to by default
pub const DEFAULT_LEVELS_DIR: &str = "assets/levels";
/// Extension appended to level names
pub const LEVEL_EXTENSION: &str = "txt";

// Image conversion
/// Pixels with alpha below this value leave their cell empty
pub const OPAQUE_ALPHA_THRESHOLD: u8 = 128;
/// Suffix added to rendered preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";

// Preview rendering
/// Colour laid over empty cells when they are highlighted
pub const EMPTY_CELL_TINT: [u8; 4] = [255, 0, 0, 120];
/// Colour of the dashed gridlines
pub const GRIDLINE_COLOR: [u8; 4] = [255, 0, 0, 255];

// Logging
/// Log specification used when `RUST_LOG` is unset
pub const DEFAULT_LOG_SPEC: &str = "info";
/// Log specification used with `--quiet`
pub const QUIET_LOG_SPEC: &str = "warn";
