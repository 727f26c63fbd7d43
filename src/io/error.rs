//! Error types for grid, atlas and level file operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::query::OutOfRange;

/// Main error type for all level editing operations
#[derive(Debug)]
pub enum LevelError {
    /// A texture name outside the known set was requested
    UnknownTexture {
        /// The name that was requested
        name: String,
        /// Every name the lookup accepts
        available: Vec<&'static str>,
    },

    /// A cell index does not address a cell of the current tiling
    ///
    /// Spatial queries report a miss as a plain
    /// [`crate::spatial::query::OutOfRange`] value; this variant is for
    /// callers that address a cell directly.
    CellOutOfRange {
        /// Requested column index
        column: usize,
        /// Requested row index
        row: usize,
    },

    /// A spatial query was promoted to a hard error
    QueryOutOfRange {
        /// The query outcome that missed the grid
        source: OutOfRange,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// The atlas image does not contain the region of a texture
    AtlasRegion {
        /// Texture whose region is missing
        name: &'static str,
        /// Left edge of the region
        x: u32,
        /// Top edge of the region
        y: u32,
        /// Side length of the region
        size: u32,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// The logger could not be started
    Logger {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTexture { name, available } => {
                write!(
                    f,
                    "'{name}' does not have a texture. Available textures are: {}",
                    available.join(", ")
                )
            }
            Self::CellOutOfRange { column, row } => {
                write!(f, "No cell at column {column}, row {row}")
            }
            Self::QueryOutOfRange { source } => write!(f, "Grid query failed: {source}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::AtlasRegion { name, x, y, size } => {
                write!(
                    f,
                    "Atlas has no {size}x{size} region at ({x}, {y}) for texture '{name}'"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Logger { source } => write!(f, "Failed to start logger: {source}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logger { source } => Some(source),
            Self::QueryOutOfRange { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for level editing results
pub type Result<T> = std::result::Result<T, LevelError>;

impl From<image::ImageError> for LevelError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LevelError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<OutOfRange> for LevelError {
    fn from(err: OutOfRange) -> Self {
        Self::QueryOutOfRange { source: err }
    }
}

impl From<flexi_logger::FlexiLoggerError> for LevelError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logger { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LevelError {
    LevelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> LevelError {
    LevelError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
