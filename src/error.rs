use std::path::PathBuf;

use thiserror::Error;

/// Why a time-of-day entry produced no suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("Please enter a time of day")]
    EmptyInput,

    #[error(
        "Invalid time. Try: Morning, Mid-morning, Afternoon, Mid-afternoon, Dinner, After dinner"
    )]
    UnrecognizedTimeOfDay,
}

/// Application-level errors for mealpick
#[derive(Debug, Error)]
pub enum MealpickError {
    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
