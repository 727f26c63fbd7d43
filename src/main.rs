//! CLI entry point for converting images into level files

use clap::Parser;
use levelgrid::io::cli::{Cli, FileProcessor};
use levelgrid::io::logging::init_logging;

fn main() -> levelgrid::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.quiet)?;
    let mut processor = FileProcessor::new(cli)?;
    let written = processor.process()?;
    log::info!("Wrote {} level file(s)", written.len());
    Ok(())
}
