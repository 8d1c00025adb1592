//! The TOC transform
//!
//! `transform` takes a whole markdown document and returns the same document
//! with the section under the matched heading replaced by a generated list
//! of links. The rest of the document is carried through byte for byte.

use crate::error::{TransformError, TransformResult};
use crate::toc::{extract_headings, render_list, Heading};
use regex::Regex;

/// Default heading pattern: "contents", "table of contents",
/// "table-of-contents", "toc" and close variants, case-insensitive
pub const DEFAULT_HEADING: &str = "(table[ -]of[ -])?contents?|toc";

/// Deepest heading level included in the generated list
pub const DEFAULT_MAX_DEPTH: u8 = 6;

/// Options for the TOC transform
#[derive(Debug, Clone)]
pub struct Options {
    /// Pattern for the heading to insert the list under; `None` uses
    /// [`DEFAULT_HEADING`]. Treated as a regex fragment, anchored and
    /// matched case-insensitively against the full heading text.
    pub heading: Option<String>,

    /// Render the list without blank lines between items
    pub tight: bool,

    /// Skip headings deeper than this level
    pub max_depth: u8,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            heading: None,
            tight: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading pattern
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Set tight list rendering
    pub fn with_tight(mut self, tight: bool) -> Self {
        self.tight = tight;
        self
    }

    /// Set the maximum heading depth
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Replace the section under the matched heading with a generated TOC
///
/// The section runs from the end of the matched heading to the start of the
/// next heading at the same level or shallower. The generated list covers
/// that next heading and everything after it. If no heading matches, or
/// there is nothing to list, the document is returned unchanged.
pub fn transform(input: &str, options: &Options) -> TransformResult<String> {
    let matcher = heading_matcher(options.heading.as_deref())?;
    let headings = extract_headings(input);

    let Some(open_idx) = headings.iter().position(|h| matcher.is_match(h.text.trim())) else {
        return Ok(input.to_string());
    };
    let open = &headings[open_idx];

    // First heading after the opening one at its level or shallower closes
    // the section; everything in between is the stale TOC and gets replaced
    let close_idx = headings[open_idx + 1..]
        .iter()
        .position(|h| h.level <= open.level)
        .map(|i| i + open_idx + 1);

    let Some(close_idx) = close_idx else {
        // Nothing follows the section, so there is nothing to list
        return Ok(input.to_string());
    };

    let entries: Vec<Heading> = headings[close_idx..]
        .iter()
        .filter(|h| h.level <= options.max_depth)
        .cloned()
        .collect();

    let list = render_list(&entries, options.tight);
    if list.is_empty() {
        return Ok(input.to_string());
    }

    let mut out = String::with_capacity(input.len() + list.len());
    out.push_str(input[..open.span.end].trim_end_matches('\n'));
    out.push_str("\n\n");
    out.push_str(&list);
    out.push('\n');
    out.push_str(input[headings[close_idx].span.start..].trim_start_matches('\n'));
    Ok(out)
}

/// Build the case-insensitive full-text matcher for the opening heading
fn heading_matcher(heading: Option<&str>) -> TransformResult<Regex> {
    let pattern = heading.unwrap_or(DEFAULT_HEADING);
    Regex::new(&format!("^(?i:{})$", pattern))
        .map_err(|_| TransformError::InvalidHeadingPattern(pattern.to_string()))
}
