//! Writing level files to disk

use std::path::{Path, PathBuf};

use crate::codec::serializer::build_save_payload;
use crate::io::configuration::LEVEL_EXTENSION;
use crate::io::error::{LevelError, Result, invalid_parameter};
use crate::spatial::grid::Grid;

/// Path of the file a level called `level_name` is saved to
pub fn level_path(levels_dir: &Path, level_name: &str) -> PathBuf {
    levels_dir.join(format!("{level_name}.{LEVEL_EXTENSION}"))
}

/// Serialize `grid` and write it to `<levels_dir>/<level_name>.txt`
///
/// Missing directories are created. Returns the path written.
///
/// # Errors
///
/// Returns an error if the name is empty or contains a path separator, or if
/// the directory or file cannot be written
pub fn save_level(grid: &Grid, levels_dir: &Path, level_name: &str) -> Result<PathBuf> {
    if level_name.is_empty() || level_name.contains(['/', '\\']) {
        return Err(invalid_parameter(
            "level_name",
            &level_name,
            &"must be a non-empty name without path separators",
        ));
    }

    let payload = build_save_payload(grid)?;

    std::fs::create_dir_all(levels_dir).map_err(|e| LevelError::FileSystem {
        path: levels_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let path = level_path(levels_dir, level_name);
    std::fs::write(&path, &payload.text).map_err(|e| LevelError::FileSystem {
        path: path.clone(),
        operation: "write level",
        source: e,
    })?;

    log::info!(
        "Saved level '{level_name}' ({} columns, {} tokens) to {}",
        payload.width,
        payload.tokens.len(),
        path.display()
    );
    Ok(path)
}
