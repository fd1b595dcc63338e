//! Query evaluation over the current index generation.

use super::analyzer::{find_ignore_case, normalize};
use super::snippet::make_snippet;
use super::store::IndexStore;
use super::types::SearchHit;

/// Query engine reading from an index store.
pub struct SearchEngine<'a> {
    store: &'a IndexStore,
}

impl<'a> SearchEngine<'a> {
    /// Create a new search engine.
    pub fn new(store: &'a IndexStore) -> Self {
        Self { store }
    }

    /// Evaluate a raw query and return ranked hits.
    ///
    /// A blank query and an absent index both yield an empty result set;
    /// search never fails. Each hit carries a highlighted snippet and the
    /// byte offset of the first case-insensitive occurrence of the query
    /// in the original note body (`None` when the raw-text search cannot
    /// locate what the index matched).
    pub fn search(&self, raw_query: &str) -> Vec<SearchHit> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let Some(generation) = self.store.current() else {
            return Vec::new();
        };

        let pattern = normalize(query);
        generation
            .lookup(&pattern)
            .into_iter()
            .map(|doc| SearchHit {
                file_name: doc.file_name.clone(),
                full_path: doc.full_path.clone(),
                snippet: make_snippet(&doc.content, query),
                match_start: find_ignore_case(&doc.content, query),
                keyword: query.to_string(),
            })
            .collect()
    }
}
