use std::path::PathBuf;

use thiserror::Error;

/// Reasons a catalogue or sales document could not be loaded.
///
/// Each variant names the offending path; its [`Display`](std::fmt::Display)
/// text is the message shown to the user.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{}' not found.", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format in '{}'.", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected record layout in '{}': {source}", path.display())]
    UnexpectedLayout {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Any failure that stops a run before its report is delivered.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Cannot write report to display: {0}")]
    Display(#[source] std::io::Error),

    #[error("Cannot write results to '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
