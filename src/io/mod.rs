//! Input/output, configuration and error handling

/// Texture atlas backed by an image file
pub mod atlas;
/// Command-line interface and batch conversion
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image conversion and preview export
pub mod image;
/// Level file writing
pub mod level;
/// Logger start-up
pub mod logging;
/// Batch progress display
pub mod progress;
