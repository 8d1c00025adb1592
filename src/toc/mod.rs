//! Table-of-contents generation
//!
//! This module turns a markdown document into the same document with a fresh
//! table of contents inserted under a matched heading: heading extraction,
//! anchor slugs, list rendering, and the splice that ties them together.

pub mod heading;
pub mod list;
pub mod slug;
pub mod transform;

// Re-export main types
pub use heading::*;
pub use list::*;
pub use slug::*;
pub use transform::*;
