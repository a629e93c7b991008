//! Theory-to-case reference documents.
//!
//! Documents are plain markdown files looked up relative to a docs root.
//! A document that cannot be read is replaced by a visible placeholder so
//! the theory tab always renders.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Title and relative path of each document, in display order
pub const THEORY_DOCUMENTS: [(&str, &str); 3] = [
    (
        "Value Proposition Map",
        "theory-to-case/value-proposition-map.md",
    ),
    (
        "Strategic Challenges Map",
        "theory-to-case/strategic-challenges-map.md",
    ),
    ("Frameworks Applied", "theory-to-case/frameworks.md"),
];

/// A loaded (or placeholder) document
#[derive(Debug, Clone, PartialEq)]
pub struct TheoryDocument {
    pub title: &'static str,
    pub relative_path: &'static str,
    pub content: String,
    /// False when `content` is the placeholder
    pub found: bool,
}

/// Placeholder shown in place of a document that could not be read
pub fn missing_placeholder(relative_path: &str) -> String {
    format!("> ⚠️ Could not find `{relative_path}`. Make sure your repo contains this file.")
}

/// Read a document, or log why it could not be read and return the placeholder.
///
/// The flag is false when the placeholder was substituted.
fn read_or_placeholder(root: &Path, relative_path: &str) -> (String, bool) {
    let path: PathBuf = root.join(relative_path);
    match fs::read_to_string(&path) {
        Ok(content) => (content, true),
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), "Theory document not found");
            } else {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read theory document");
            }
            (missing_placeholder(relative_path), false)
        }
    }
}

/// Load a markdown file relative to `root`, never failing.
pub fn load_markdown(root: &Path, relative_path: &str) -> String {
    read_or_placeholder(root, relative_path).0
}

/// Load every theory document under `root`
pub fn load_theory_documents(root: &Path) -> Vec<TheoryDocument> {
    THEORY_DOCUMENTS
        .iter()
        .map(|&(title, relative_path)| {
            let (content, found) = read_or_placeholder(root, relative_path);
            TheoryDocument {
                title,
                relative_path,
                content,
                found,
            }
        })
        .collect()
}
