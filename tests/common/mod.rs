//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small document with a TOC heading and a few sections
pub const SAMPLE_DOC: &str =
    "# Alpha\n\n## Table of Contents\n\n## Bravo\n\n### Charlie\n\n## Delta\n";

/// The sample document after a TOC run
pub const SAMPLE_DOC_WITH_TOC: &str = "# Alpha\n\n## Table of Contents\n\n\
     - [Bravo](#bravo)\n  - [Charlie](#charlie)\n- [Delta](#delta)\n\n\
     ## Bravo\n\n### Charlie\n\n## Delta\n";

/// Create a temporary directory holding a markdown file with the given content
pub fn create_test_doc(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let doc_path = temp_dir.path().join("Readme.md");
    fs::write(&doc_path, content).unwrap();
    (temp_dir, doc_path)
}
