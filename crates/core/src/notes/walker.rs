//! Recursive notes directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::search::NoteFile;

#[derive(Debug, Error)]
pub enum NotesWalkerError {
    #[error("notes root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk notes directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walker for discovering note files under a notes root.
#[derive(Debug)]
pub struct NotesWalker {
    root: PathBuf,
}

impl NotesWalker {
    /// Create a new walker for the given notes root.
    pub fn new(root: &Path) -> Result<Self, NotesWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| NotesWalkerError::MissingRoot(root.display().to_string()))?;
        Ok(Self { root })
    }

    /// Walk the notes root and return all note files, sorted by path.
    /// Hidden entries and common non-notes directories are skipped.
    pub fn walk(&self) -> Result<Vec<NoteFile>, NotesWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                NotesWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_note_file(path) {
                continue;
            }

            files.push(NoteFile::from_path(path.to_path_buf()));
        }

        files.sort_by(|a, b| a.full_path.cmp(&b.full_path));
        Ok(files)
    }

    /// Get the notes root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_excluded(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();

    // Skip hidden files and directories
    if name.starts_with('.') {
        return true;
    }

    // Skip common non-notes directories
    matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv")
}

fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e, "md" | "txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_notes() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("note1.md"), "# Note 1").unwrap();
        fs::write(root.join("note2.txt"), "Plain note").unwrap();

        fs::create_dir(root.join("projects")).unwrap();
        fs::write(root.join("projects/note3.md"), "# Note 3").unwrap();

        // Hidden directory (should be skipped)
        fs::create_dir(root.join(".trash")).unwrap();
        fs::write(root.join(".trash/old.md"), "# Old").unwrap();

        // Non-note file (should be skipped)
        fs::write(root.join("scan.pdf"), "%PDF").unwrap();

        dir
    }

    #[test]
    fn test_walk_finds_note_files() {
        let notes = create_test_notes();
        let walker = NotesWalker::new(notes.path()).unwrap();
        let files = walker.walk().unwrap();

        assert_eq!(files.len(), 3);

        let names: Vec<_> = files.iter().map(|f| f.file_name.clone()).collect();
        assert!(names.contains(&"note1.md".to_string()));
        assert!(names.contains(&"note2.txt".to_string()));
        assert!(names.contains(&"note3.md".to_string()));
    }

    #[test]
    fn test_walk_skips_hidden_directories() {
        let notes = create_test_notes();
        let walker = NotesWalker::new(notes.path()).unwrap();
        let files = walker.walk().unwrap();

        assert!(!files.iter().any(|f| f.full_path.to_string_lossy().contains(".trash")));
    }

    #[test]
    fn test_walk_skips_non_note_files() {
        let notes = create_test_notes();
        let walker = NotesWalker::new(notes.path()).unwrap();
        let files = walker.walk().unwrap();

        assert!(!files.iter().any(|f| f.file_name == "scan.pdf"));
    }

    #[test]
    fn test_walk_results_sorted() {
        let notes = create_test_notes();
        let walker = NotesWalker::new(notes.path()).unwrap();
        let files = walker.walk().unwrap();

        let paths: Vec<_> = files.iter().map(|f| &f.full_path).collect();
        let mut sorted = paths.clone();
        sorted.sort();

        assert_eq!(paths, sorted);
    }

    #[test]
    fn test_missing_root() {
        let result = NotesWalker::new(Path::new("/nonexistent/path"));
        assert!(matches!(result.unwrap_err(), NotesWalkerError::MissingRoot(_)));
    }
}
