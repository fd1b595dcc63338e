//! Search command implementation.

use std::path::Path;

use notewiki_core::config::loader::ConfigLoader;
use notewiki_core::search::{IndexStore, SearchEngine, SearchHit};
use serde::Serialize;

use super::output::{single_line, truncate};
use crate::{OutputFormat, SearchArgs};

/// Search hit for JSON output.
#[derive(Debug, Serialize)]
struct SearchHitOutput {
    file: String,
    path: String,
    snippet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_start: Option<usize>,
    keyword: String,
}

impl From<&SearchHit> for SearchHitOutput {
    fn from(hit: &SearchHit) -> Self {
        Self {
            file: hit.file_name.clone(),
            path: hit.full_path.to_string_lossy().to_string(),
            snippet: hit.snippet.clone(),
            match_start: hit.match_start,
            keyword: hit.keyword.clone(),
        }
    }
}

pub fn run(config: Option<&Path>, args: SearchArgs) {
    // Load configuration
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    crate::logging::init(&rc);

    // An index that has never been built answers every query with zero
    // hits; point the user at reindex instead of erroring.
    let store = IndexStore::open(&rc.index_dir);
    if store.current().is_none() {
        eprintln!("Hint: run 'nwk reindex' to build the index first.");
    }

    let engine = SearchEngine::new(&store);
    let mut hits = engine.search(&args.query);
    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }

    // Determine output format
    let format = resolve_format(args.json, args.quiet);

    match format {
        OutputFormat::Table => print_hits_table(&hits),
        OutputFormat::Json => print_hits_json(&hits),
        OutputFormat::Quiet => print_hits_quiet(&hits),
    }
}

/// Print search hits as a table.
fn print_hits_table(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("(no results found)");
        return;
    }

    // Calculate column widths
    let file_width =
        hits.iter().map(|h| h.file_name.len()).max().unwrap_or(4).clamp(4, 40);
    let snippet_width = 60;

    // Header
    println!(
        "{:<file_width$}  {:<snippet_width$}  OFFSET",
        "FILE",
        "SNIPPET",
        file_width = file_width,
        snippet_width = snippet_width,
    );
    println!(
        "{:-<file_width$}  {:-<snippet_width$}  {:-<6}",
        "",
        "",
        "",
        file_width = file_width,
        snippet_width = snippet_width,
    );

    // Rows
    for hit in hits {
        let file = truncate(&hit.file_name, file_width);
        let snippet = truncate(&single_line(&hit.snippet), snippet_width);
        let offset =
            hit.match_start.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string());

        println!(
            "{:<file_width$}  {:<snippet_width$}  {}",
            file,
            snippet,
            offset,
            file_width = file_width,
            snippet_width = snippet_width,
        );
    }

    println!();
    println!("-- {} results --", hits.len());
}

/// Print search hits as JSON.
fn print_hits_json(hits: &[SearchHit]) {
    let output: Vec<SearchHitOutput> = hits.iter().map(SearchHitOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print search hits as paths only.
fn print_hits_quiet(hits: &[SearchHit]) {
    for hit in hits {
        println!("{}", hit.full_path.display());
    }
}

/// Resolve the output format from flags.
fn resolve_format(json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        OutputFormat::Table
    }
}
