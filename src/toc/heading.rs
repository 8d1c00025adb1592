//! Heading extraction from markdown source
//!
//! Headings are collected with their plain text and the byte span they occupy
//! in the source, so the transform can splice the document without
//! re-serializing the parts it does not touch.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::ops::Range;

/// A heading found in a markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, 1 through 6
    pub level: u8,

    /// Plain text content (inline markup flattened)
    pub text: String,

    /// Byte range of the whole heading in the source
    pub span: Range<usize>,
}

/// Extract all headings from a markdown document in source order
pub fn extract_headings(input: &str) -> Vec<Heading> {
    let parser = Parser::new(input);
    let mut headings = Vec::new();
    let mut current: Option<Heading> = None;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some(Heading {
                    level: level as u8,
                    text: String::new(),
                    span: range,
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    headings.push(heading);
                }
            }
            // Inline code and soft breaks still contribute to the plain text
            Event::Text(t) | Event::Code(t) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}
