//! md-toc - generate and refresh tables of contents in markdown files
//!
//! md-toc reads a markdown document, finds a "Table of Contents" heading, and
//! replaces everything beneath it with a nested list of links to the
//! document's other headings.

// Public modules
pub mod cli;
pub mod error;
pub mod toc;
pub mod ui;

// Re-export commonly used types
pub use error::{MdTocError, Result};

/// Current version of md-toc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
