//! Command-line interface for converting PNG images into level files

use crate::editor::state::Editor;
use crate::io::atlas::TextureAtlas;
use crate::io::configuration::{DEFAULT_LEVELS_DIR, INITIAL_CELL_SIZE, PREVIEW_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, load_rgba, selections_from_image};
use crate::io::level::level_path;
use crate::io::progress::ProgressManager;
use crate::spatial::grid::Grid;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "levelgrid")]
#[command(
    author,
    version,
    about = "Convert greyscale images into run-length encoded level files"
)]
/// Command-line arguments for the level converter
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Side length of each cell in pixels
    #[arg(short, long, default_value_t = INITIAL_CELL_SIZE)]
    pub cell_size: u32,

    /// Directory level files are written to
    #[arg(short, long, default_value = DEFAULT_LEVELS_DIR)]
    pub levels_dir: PathBuf,

    /// Atlas image providing the textures (built-in grey shades otherwise)
    #[arg(short, long)]
    pub atlas: Option<PathBuf>,

    /// Also export a rendered preview PNG next to each level
    #[arg(short, long)]
    pub preview: bool,

    /// Draw gridlines on the preview
    #[arg(short, long)]
    pub gridlines: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process images even if their level file exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing level files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch conversion of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    atlas: TextureAtlas,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a file processor, loading the atlas if one was given
    ///
    /// # Errors
    ///
    /// Returns an error if the cell size is zero or the atlas cannot be loaded
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.cell_size == 0 {
            return Err(invalid_parameter(
                "cell-size",
                &cli.cell_size,
                &"must be at least one pixel",
            ));
        }

        let atlas = match &cli.atlas {
            Some(path) => TextureAtlas::from_path(path)?,
            None => TextureAtlas::default(),
        };
        log::debug!(
            "Using {}px textures for {}px cells",
            atlas.texture_size(),
            cli.cell_size
        );
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            atlas,
            progress_manager,
        })
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the paths of the level files written.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("Nothing to convert in '{}'", self.cli.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            written.push(self.process_file(file)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_png(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = level_path(&self.cli.levels_dir, &Self::level_name(input_path));
        if output_path.exists() {
            log::info!("Skipping: {} (level exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<PathBuf> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_rgba(input_path)?;
        let (width, height) = source.dimensions();
        let mut grid = Grid::new(self.atlas.clone(), self.cli.cell_size, width, height)?;
        if grid.flags().gridlines_shown != self.cli.gridlines {
            grid.toggle_gridlines();
        }

        let mut editor = Editor::new(grid, &self.cli.levels_dir);
        for (index, selection) in selections_from_image(editor.grid(), &source) {
            editor.paint_cell(index, selection)?;
        }

        let level_path = editor.save(&Self::level_name(input_path))?;

        if self.cli.preview {
            export_grid_as_png(editor.grid(), &Self::get_preview_path(&level_path))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(level_path)
    }

    fn level_name(input_path: &Path) -> String {
        input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }

    fn get_preview_path(level_path: &Path) -> PathBuf {
        let stem = level_path.file_stem().unwrap_or_default();
        let preview_name = format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = level_path.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}
