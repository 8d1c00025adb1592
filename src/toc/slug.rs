//! GitHub-style anchor slugs for headings

use std::collections::HashMap;

/// Stateful slug generator
///
/// Tracks previously issued slugs so repeated heading texts get `-1`, `-2`,
/// ... suffixes, matching the anchors GitHub generates for a rendered page.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Create a new slugger with no history
    pub fn new() -> Self {
        Slugger {
            seen: HashMap::new(),
        }
    }

    /// Produce a unique slug for a heading text
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let result = if *count == 0 {
            base.clone()
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        // Reserve the suffixed form too so a literal "foo-1" heading
        // cannot collide with a generated one
        if result != base {
            self.seen.entry(result.clone()).or_insert(1);
        }
        result
    }
}

/// Slugify a single heading text without duplicate tracking
///
/// Lowercases, keeps alphanumerics, hyphens and underscores, turns
/// whitespace into hyphens, and drops everything else.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('-');
        }
    }
    out
}
