//! Full-text search over note content.
//!
//! This module is the search subsystem of the notes manager:
//! - Analyzer: case-folding normalization shared by indexing and queries
//! - Index store: inverted term index over note bodies, exactly one
//!   immutable generation current at a time, swapped atomically on rebuild
//! - Builder: turns the current note set into a fresh generation
//! - Engine: wildcard-style substring queries returning ranked hits
//! - Snippets: bounded excerpts with whole-word highlight marks, plus the
//!   looser full-document preview highlighting
//!
//! # Example
//!
//! ```no_run
//! use notewiki_core::search::{IndexBuilder, IndexStore, NoteFile, SearchEngine};
//! use std::path::{Path, PathBuf};
//!
//! let store = IndexStore::open(Path::new(".notewiki"));
//! let builder = IndexBuilder::new(&store);
//! builder.rebuild(&[NoteFile::from_path(PathBuf::from("ideas.md"))]).unwrap();
//!
//! let engine = SearchEngine::new(&store);
//! for hit in engine.search("garden") {
//!     println!("{}: {}", hit.file_name, hit.snippet);
//! }
//! ```

pub mod analyzer;
pub mod builder;
pub mod engine;
pub mod snippet;
pub mod store;
pub mod types;

pub use analyzer::{find_ignore_case, normalize, tokenize};
pub use builder::{BuildStats, BuilderError, IndexBuilder};
pub use engine::SearchEngine;
pub use snippet::{PreviewHighlight, highlight_preview, make_snippet};
pub use store::{IndexError, IndexGeneration, IndexStore, MAX_HITS};
pub use types::{Document, NoteFile, SearchHit};
