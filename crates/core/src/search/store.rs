//! Index generations and the store that swaps them.
//!
//! A generation is one complete, immutable snapshot of the inverted
//! index. The store keeps at most one generation current; a rebuild
//! installs a fully-built replacement and flips the pointer, so queries
//! see either the old snapshot or the new one, never a mix.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::analyzer::{normalize, tokenize};
use super::types::Document;

/// Upper bound on hits returned by a single lookup.
pub const MAX_HITS: usize = 100;

/// On-disk format version. A file with another version is treated as an
/// absent index, not an error.
const FORMAT_VERSION: u32 = 1;

const INDEX_FILE: &str = "index.json";

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to write index file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode index: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Term frequency of one term in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Position of the document in the generation's insertion order.
    pub doc: u32,
    /// Occurrences of the term in that document.
    pub freq: u32,
}

/// One complete, immutable snapshot of the inverted index.
///
/// Produced by a single build call and never mutated afterwards. Readers
/// holding a generation keep answering from it even while a newer one is
/// being installed.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexGeneration {
    format_version: u32,
    built_at: DateTime<Utc>,
    docs: Vec<Document>,
    vocab: BTreeMap<String, Vec<Posting>>,
}

impl IndexGeneration {
    /// Construct a generation from a snapshot of documents.
    ///
    /// Duplicate paths keep their first occurrence (logged); document
    /// order is preserved and becomes the tie-break order for lookups.
    pub(crate) fn from_documents(docs: Vec<Document>) -> Self {
        let mut unique: Vec<Document> = Vec::with_capacity(docs.len());
        for doc in docs {
            if unique.iter().any(|d| d.full_path == doc.full_path) {
                tracing::warn!(
                    "duplicate document path skipped: {}",
                    doc.full_path.display()
                );
                continue;
            }
            unique.push(doc);
        }

        let mut vocab: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
        for (doc_id, doc) in unique.iter().enumerate() {
            let normalized = normalize(&doc.content);
            let mut freqs: BTreeMap<&str, u32> = BTreeMap::new();
            for term in tokenize(&normalized) {
                *freqs.entry(term).or_insert(0) += 1;
            }
            for (term, freq) in freqs {
                vocab
                    .entry(term.to_string())
                    .or_default()
                    .push(Posting { doc: doc_id as u32, freq });
            }
        }

        Self {
            format_version: FORMAT_VERSION,
            built_at: Utc::now(),
            docs: unique,
            vocab,
        }
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Number of distinct terms in the vocabulary.
    pub fn term_count(&self) -> usize {
        self.vocab.len()
    }

    /// When this generation was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Look up documents whose indexed terms contain `pattern`.
    ///
    /// Wildcard `*pattern*` semantics: every vocabulary term containing
    /// the (already normalized) pattern as a substring contributes its
    /// postings. Hits are ordered by summed term frequency descending,
    /// ties broken by insertion order, and capped at [`MAX_HITS`].
    pub fn lookup(&self, pattern: &str) -> Vec<&Document> {
        if pattern.is_empty() || self.docs.is_empty() {
            return Vec::new();
        }

        let mut scores = vec![0u32; self.docs.len()];
        for (term, postings) in &self.vocab {
            if term.contains(pattern) {
                for posting in postings {
                    scores[posting.doc as usize] += posting.freq;
                }
            }
        }

        let mut scored: Vec<(usize, u32)> = scores
            .into_iter()
            .enumerate()
            .filter(|&(_, score)| score > 0)
            .collect();
        // Stable sort keeps insertion order within equal scores.
        scored.sort_by_key(|&(_, score)| Reverse(score));
        scored.truncate(MAX_HITS);

        scored.into_iter().map(|(doc_id, _)| &self.docs[doc_id]).collect()
    }
}

/// Handle on an index location, holding the current generation.
///
/// Readers clone the `Arc` out under a short read lock; the builder
/// installs a fully-built replacement under the write lock, held only for
/// the pointer assignment.
pub struct IndexStore {
    location: PathBuf,
    current: RwLock<Option<Arc<IndexGeneration>>>,
}

impl IndexStore {
    /// Open the store at `location`.
    ///
    /// A location where no index has been built yet, or whose index file
    /// is unreadable or from another format version, yields a store with
    /// no current generation. Queries against it return zero hits; it is
    /// never an error.
    pub fn open(location: impl Into<PathBuf>) -> Self {
        let location = location.into();
        let current = load_generation(&location.join(INDEX_FILE)).map(Arc::new);
        Self { location, current: RwLock::new(current) }
    }

    /// The generation queries should run against, if one exists.
    pub fn current(&self) -> Option<Arc<IndexGeneration>> {
        let guard = match self.current.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clone()
    }

    /// Install a freshly-built generation: persist it, then swap it in.
    ///
    /// Readers holding the previous generation finish against it
    /// undisturbed.
    pub fn install(&self, generation: IndexGeneration) -> Result<(), IndexError> {
        self.persist(&generation)?;

        let generation = Arc::new(generation);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(generation);
        Ok(())
    }

    /// Where this store persists its generations.
    pub fn location(&self) -> &Path {
        &self.location
    }

    fn persist(&self, generation: &IndexGeneration) -> Result<(), IndexError> {
        std::fs::create_dir_all(&self.location).map_err(|e| IndexError::Write {
            path: self.location.clone(),
            source: e,
        })?;

        let encoded = serde_json::to_vec(generation).map_err(IndexError::Encode)?;

        // Write to a sibling temp file, then rename over the live one.
        let tmp = self.location.join("index.json.tmp");
        let target = self.location.join(INDEX_FILE);
        std::fs::write(&tmp, &encoded)
            .map_err(|e| IndexError::Write { path: tmp.clone(), source: e })?;
        std::fs::rename(&tmp, &target)
            .map_err(|e| IndexError::Write { path: target, source: e })?;
        Ok(())
    }
}

fn load_generation(path: &Path) -> Option<IndexGeneration> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("failed to read index file {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str::<IndexGeneration>(&raw) {
        Ok(generation) if generation.format_version == FORMAT_VERSION => {
            Some(generation)
        }
        Ok(generation) => {
            tracing::warn!(
                "ignoring index file {} with format version {}",
                path.display(),
                generation.format_version
            );
            None
        }
        Err(e) => {
            tracing::warn!("ignoring corrupt index file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn doc(name: &str, content: &str) -> Document {
        Document {
            file_name: name.to_string(),
            full_path: PathBuf::from(format!("/notes/{}", name)),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_lookup_matches_terms_containing_pattern() {
        let generation = IndexGeneration::from_documents(vec![
            doc("a.md", "the cat sat"),
            doc("b.md", "a catalogue of items"),
            doc("c.md", "dogs only"),
        ]);

        let hits = generation.lookup("cat");
        let names: Vec<_> = hits.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_lookup_ranks_by_term_frequency() {
        let generation = IndexGeneration::from_documents(vec![
            doc("once.md", "cat"),
            doc("thrice.md", "cat cat cat"),
        ]);

        let hits = generation.lookup("cat");
        let names: Vec<_> = hits.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(names, vec!["thrice.md", "once.md"]);
    }

    #[test]
    fn test_lookup_breaks_ties_by_insertion_order() {
        let generation = IndexGeneration::from_documents(vec![
            doc("first.md", "cat one"),
            doc("second.md", "cat two"),
            doc("third.md", "cat three"),
        ]);

        let hits = generation.lookup("cat");
        let names: Vec<_> = hits.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(names, vec!["first.md", "second.md", "third.md"]);
    }

    #[test]
    fn test_lookup_caps_hits() {
        let docs: Vec<_> = (0..(MAX_HITS + 20))
            .map(|i| doc(&format!("n{}.md", i), "shared term"))
            .collect();
        let generation = IndexGeneration::from_documents(docs);

        assert_eq!(generation.lookup("shared").len(), MAX_HITS);
    }

    #[test]
    fn test_lookup_empty_pattern_returns_nothing() {
        let generation = IndexGeneration::from_documents(vec![doc("a.md", "text")]);
        assert!(generation.lookup("").is_empty());
    }

    #[test]
    fn test_lookup_is_case_normalized_at_index_time() {
        let generation =
            IndexGeneration::from_documents(vec![doc("a.md", "MIXED Case Words")]);
        assert_eq!(generation.lookup("mixed").len(), 1);
    }

    #[test]
    fn test_duplicate_paths_keep_first() {
        let generation = IndexGeneration::from_documents(vec![
            doc("a.md", "first version"),
            doc("a.md", "second version"),
        ]);

        assert_eq!(generation.len(), 1);
        assert_eq!(generation.documents()[0].content, "first version");
    }

    #[test]
    fn test_open_absent_location() {
        let dir = TempDir::new().unwrap();
        let store = IndexStore::open(dir.path().join("never-built"));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_install_then_reopen() {
        let dir = TempDir::new().unwrap();

        let store = IndexStore::open(dir.path());
        let generation =
            IndexGeneration::from_documents(vec![doc("a.md", "persisted words")]);
        store.install(generation).unwrap();

        let reopened = IndexStore::open(dir.path());
        let current = reopened.current().expect("generation should reload");
        assert_eq!(current.lookup("persisted").len(), 1);
    }

    #[test]
    fn test_install_replaces_current_generation() {
        let dir = TempDir::new().unwrap();
        let store = IndexStore::open(dir.path());

        store
            .install(IndexGeneration::from_documents(vec![doc("old.md", "old words")]))
            .unwrap();
        let old = store.current().unwrap();

        store
            .install(IndexGeneration::from_documents(vec![doc("new.md", "new words")]))
            .unwrap();
        let new = store.current().unwrap();

        // The reader that grabbed the old generation still answers from it.
        assert_eq!(old.lookup("old").len(), 1);
        assert!(new.lookup("old").is_empty());
        assert_eq!(new.lookup("new").len(), 1);
    }

    #[test]
    fn test_corrupt_index_file_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.json"), "not json at all").unwrap();

        let store = IndexStore::open(dir.path());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_version_mismatch_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.json"),
            r#"{"format_version":999,"built_at":"2024-01-01T00:00:00Z","docs":[],"vocab":{}}"#,
        )
        .unwrap();

        let store = IndexStore::open(dir.path());
        assert!(store.current().is_none());
    }
}
