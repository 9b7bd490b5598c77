use std::{ffi::c_int, io};

use tracing::Level;

use crate::error::LoggingError;

/// Maps a C-side verbosity onto a tracing level. Out-of-range values clamp.
pub fn level_from_verbosity(verbosity: c_int) -> Level {
    match verbosity {
        c_int::MIN..=0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Output goes to stderr; stdout is reserved
/// for [`crate::print`].
pub fn init(level: Level) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
