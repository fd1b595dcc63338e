//! Index building orchestration.

use std::time::Instant;

use thiserror::Error;

use super::store::{IndexError, IndexGeneration, IndexStore};
use super::types::{Document, NoteFile};

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("index store error: {0}")]
    Store(#[from] IndexError),
}

/// Statistics from one rebuild.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of note files handed to the builder.
    pub files_found: usize,
    /// Number of notes indexed into the new generation.
    pub notes_indexed: usize,
    /// Number of notes skipped because their content was unreadable.
    pub notes_skipped: usize,
    /// Number of distinct terms in the new generation.
    pub terms_indexed: usize,
    /// Rebuild duration in milliseconds.
    pub duration_ms: u64,
}

/// Builder producing fresh index generations.
pub struct IndexBuilder<'a> {
    store: &'a IndexStore,
}

impl<'a> IndexBuilder<'a> {
    /// Create a new index builder targeting `store`.
    pub fn new(store: &'a IndexStore) -> Self {
        Self { store }
    }

    /// Rebuild the index from the given note set.
    ///
    /// Reads each note body from disk; unreadable notes are skipped with a
    /// warning rather than failing the rebuild. The finished generation
    /// replaces the previous one wholesale: notes absent from `notes` do
    /// not survive into the new generation.
    pub fn rebuild(&self, notes: &[NoteFile]) -> Result<BuildStats, BuilderError> {
        let start = Instant::now();
        let mut stats = BuildStats { files_found: notes.len(), ..Default::default() };

        let mut docs: Vec<Document> = Vec::with_capacity(notes.len());
        for note in notes {
            match std::fs::read_to_string(&note.full_path) {
                Ok(content) => docs.push(Document {
                    file_name: note.file_name.clone(),
                    full_path: note.full_path.clone(),
                    content,
                }),
                Err(e) => {
                    // Skip and keep indexing the rest.
                    tracing::warn!(
                        "failed to read {}: {}",
                        note.full_path.display(),
                        e
                    );
                    stats.notes_skipped += 1;
                }
            }
        }

        let generation = Self::build_documents(docs);
        stats.notes_indexed = generation.len();
        stats.terms_indexed = generation.term_count();
        self.store.install(generation)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            "rebuilt index: {} notes, {} terms, {}ms",
            stats.notes_indexed,
            stats.terms_indexed,
            stats.duration_ms
        );
        Ok(stats)
    }

    /// Construct a generation from documents already in memory.
    ///
    /// Deterministic: building twice from the same snapshot yields
    /// generations that answer every query identically.
    pub fn build_documents(docs: Vec<Document>) -> IndexGeneration {
        IndexGeneration::from_documents(docs)
    }
}
