//! Tracing setup.
//!
//! The TUI owns stdout and stderr while it runs, so interactive sessions
//! log to a file. Non-interactive commands log to stderr.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Log to `path`, creating parent directories as needed.
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create log directory", e))?;
    }
    let file = File::create(path).map_err(|e| Error::io("create log file", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Log warnings (or whatever `RUST_LOG` asks for) to stderr.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
