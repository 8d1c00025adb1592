//! Error types for md-toc

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for md-toc operations
pub type Result<T> = std::result::Result<T, MdTocError>;

/// Main error type for md-toc
#[derive(Error, Debug)]
pub enum MdTocError {
    /// TOC transformation errors
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Failure reading an input file
    #[error("Failed to read '{path}': {source}")]
    ReadFile { path: PathBuf, source: io::Error },

    /// Failure writing a transformed file back in place
    #[error("Failed to write '{path}': {source}")]
    WriteFile { path: PathBuf, source: io::Error },

    /// Failure reading the standard input stream
    #[error("Failed to read stdin: {0}")]
    Stdin(io::Error),

    /// Other I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors produced by the TOC transformer
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Invalid heading pattern '{0}'")]
    InvalidHeadingPattern(String),
}

/// Specialized result type for transform operations
pub type TransformResult<T> = std::result::Result<T, TransformError>;
