//! Terminal output helpers
//!
//! Diagnostic lines go to stderr so stdout stays clean for the transformed
//! document.

use colored::Colorize;

/// Debug logger gated by the --debug flag
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugLog {
    enabled: bool,
}

impl DebugLog {
    /// Create a logger; messages are dropped unless `enabled` is true
    pub fn new(enabled: bool) -> Self {
        DebugLog { enabled }
    }

    /// Whether debug output is enabled
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Print a debug line to stderr
    pub fn line(&self, message: impl AsRef<str>) {
        if self.enabled {
            eprintln!("{} {}", "Debug:".yellow().bold(), message.as_ref().dimmed());
        }
    }

    /// Print a horizontal rule to stderr
    pub fn rule(&self) {
        self.line("-".repeat(80));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        assert!(!DebugLog::default().enabled());
    }

    #[test]
    fn test_enabled() {
        assert!(DebugLog::new(true).enabled());
        assert!(!DebugLog::new(false).enabled());
    }
}
