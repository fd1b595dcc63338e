//! Note file discovery.
//!
//! The document source for the index: walks the notes root and hands the
//! builder the current set of note files.

pub mod walker;

pub use walker::{NotesWalker, NotesWalkerError};
