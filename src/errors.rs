/*!
 * Error types for the corpus validator.
 *
 * Only fatal conditions live here. Problems found inside records are not
 * errors in the Rust sense; they are collected as `ValidationIssue`s and
 * reported at the end of the run.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a validation run
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A directory the run depends on could not be listed
    #[error("Failed to read directory {path:?}: {source}")]
    DirectoryWalk {
        /// Directory being walked
        path: PathBuf,
        /// Underlying walk error
        source: walkdir::Error,
    },

    /// A record file could not be opened or read
    #[error("Failed to read file {path:?}: {source}")]
    FileRead {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Progress or report output could not be written
    #[error("Failed to write validation output: {0}")]
    Output(#[from] std::io::Error),

    /// Configuration file exists but could not be parsed
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, CorpusError>;
