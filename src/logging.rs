//! Diagnostic logging
//!
//! The terminal is in raw mode while the app runs, so log records go to a
//! file under the user's cache directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::MealpickError;

const LOG_DIR: &str = "mealpick";
const LOG_FILE: &str = "mealpick.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Whether logging should be turned on for this run
pub fn logging_enabled(debug_flag: bool) -> bool {
    debug_flag || cfg!(debug_assertions)
}

/// Turn on file logging for this run if enabled.
///
/// Logging is optional: when the log file cannot be set up the app keeps
/// running without it and the returned warning is shown to the user.
pub fn init_logging(debug_flag: bool) -> Option<String> {
    if !logging_enabled(debug_flag) {
        return None;
    }

    init_logging_at(&log_path()?)
}

pub fn init_logging_at(path: &Path) -> Option<String> {
    init_file_logger(path)
        .err()
        .map(|e| format!("Logging disabled ({}): {}", path.display(), e))
}

/// Install a file logger at `path`. `RUST_LOG` overrides the default level.
pub fn init_file_logger(path: &Path) -> Result<(), MealpickError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = open_log_file(path)?;

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });

    // A logger may already be installed (tests, embedding); keep it.
    let _ = builder.try_init();
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, MealpickError> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
