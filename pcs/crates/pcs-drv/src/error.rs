//! Error handling module for the pcs driver.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the pcs driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("could not open file '{}'", .path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when the session was given nothing to scan.
    #[error("No input files provided")]
    NoInputFiles,

    /// Error diagnostics were reported and strict mode is on.
    #[error("scanning reported {count} error(s)")]
    Diagnostics {
        /// Number of error diagnostics across all files.
        count: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the worker pool cannot be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
