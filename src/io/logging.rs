//! Logger start-up for the command-line tool

use flexi_logger::{Logger, LoggerHandle};

use crate::io::configuration::{DEFAULT_LOG_SPEC, QUIET_LOG_SPEC};
use crate::io::error::Result;

/// Log specification for the given verbosity
pub const fn log_spec(quiet: bool) -> &'static str {
    if quiet { QUIET_LOG_SPEC } else { DEFAULT_LOG_SPEC }
}

/// Start logging to stderr
///
/// `RUST_LOG` takes precedence over the default specification. The returned
/// handle must be kept alive for as long as logging is wanted.
///
/// # Errors
///
/// Returns an error if the specification is invalid or a logger is already
/// installed
pub fn init_logging(quiet: bool) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(log_spec(quiet))?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
