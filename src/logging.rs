//! File logging
//!
//! The terminal belongs to the UI, so log output goes to a file. If that
//! file cannot be opened the output is discarded and startup continues.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Log file, relative to the working directory
pub const LOG_FILE: &str = "mobile-ledger.log";

/// Append-mode handle on `path`, or a sink if it cannot be opened
pub fn log_target(path: &Path) -> Box<dyn Write + Send> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    }
}

/// Initialize `env_logger` at `info`, overridable with `RUST_LOG`
pub fn init(path: &Path) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Pipe(log_target(path)))
    .init();
}
