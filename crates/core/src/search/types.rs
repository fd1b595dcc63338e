//! Search data types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One indexable unit: a note body identified by its path on disk.
///
/// Immutable for the lifetime of one index generation; a rebuild replaces
/// the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name (the file name component of the path).
    pub file_name: String,
    /// Unique identity of the document within one generation.
    pub full_path: PathBuf,
    /// Untouched note body, retained so snippet extraction can slice the
    /// original text without a second file read.
    pub content: String,
}

/// A note file discovered on disk, before its content has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub file_name: String,
    pub full_path: PathBuf,
}

impl NoteFile {
    /// Build a `NoteFile` from a path, deriving the display name from its
    /// file name component.
    pub fn from_path(full_path: PathBuf) -> Self {
        let file_name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| full_path.display().to_string());
        Self { file_name, full_path }
    }
}

/// One query result, ready for rendering.
///
/// Constructed per query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub file_name: String,
    pub full_path: PathBuf,
    /// Bounded excerpt around the first match, whole-word occurrences of
    /// the keyword wrapped in `<mark>` tags.
    pub snippet: String,
    /// Byte offset of the first case-insensitive occurrence of the raw
    /// query in the original content, the caret/scroll target. `None`
    /// when the raw-text search does not agree with the index match.
    pub match_start: Option<usize>,
    /// The raw query echoed back for client-side re-highlighting.
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_file_from_path() {
        let note = NoteFile::from_path(PathBuf::from("/notes/ideas/garden.md"));
        assert_eq!(note.file_name, "garden.md");
        assert_eq!(note.full_path, PathBuf::from("/notes/ideas/garden.md"));
    }
}
