//! Rendering a heading sequence as a nested markdown link list

use crate::toc::{Heading, Slugger};

/// Render headings as a nested list of links
///
/// Items are indented two spaces per level below the shallowest heading in
/// the slice. A tight list has no blank lines between items; a loose list
/// has one.
pub fn render_list(entries: &[Heading], tight: bool) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let min_level = entries.iter().map(|h| h.level).min().unwrap_or(1);
    let mut slugger = Slugger::new();
    let mut out = String::new();

    for (i, heading) in entries.iter().enumerate() {
        if i > 0 && !tight {
            out.push('\n');
        }
        for _ in 0..heading.level.saturating_sub(min_level) {
            out.push_str("  ");
        }
        out.push_str("- [");
        out.push_str(&escape_label(&heading.text));
        out.push_str("](#");
        out.push_str(&slugger.slug(&heading.text));
        out.push_str(")\n");
    }

    out
}

/// Escape characters that would end the link label early
fn escape_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '[' || c == ']' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> Heading {
        Heading {
            level,
            text: text.to_string(),
            span: 0..0,
        }
    }

    #[test]
    fn test_flat_tight_list() {
        let entries = vec![heading(2, "Bravo"), heading(2, "Delta")];
        let list = render_list(&entries, true);
        assert_eq!(list, "- [Bravo](#bravo)\n- [Delta](#delta)\n");
    }

    #[test]
    fn test_nested_list() {
        let entries = vec![heading(2, "Bravo"), heading(3, "Charlie"), heading(2, "Delta")];
        let list = render_list(&entries, true);
        assert_eq!(
            list,
            "- [Bravo](#bravo)\n  - [Charlie](#charlie)\n- [Delta](#delta)\n"
        );
    }

    #[test]
    fn test_loose_list_has_blank_lines() {
        let entries = vec![heading(2, "Bravo"), heading(2, "Delta")];
        let list = render_list(&entries, false);
        assert_eq!(list, "- [Bravo](#bravo)\n\n- [Delta](#delta)\n");
    }

    #[test]
    fn test_label_escaping() {
        let entries = vec![heading(2, "Array[0] access")];
        let list = render_list(&entries, true);
        assert_eq!(list, "- [Array\\[0\\] access](#array0-access)\n");
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(render_list(&[], true), "");
    }
}
