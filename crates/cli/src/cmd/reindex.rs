//! Reindex command implementation.

use std::path::Path;

use notewiki_core::config::loader::ConfigLoader;
use notewiki_core::notes::NotesWalker;
use notewiki_core::search::{IndexBuilder, IndexStore};

use crate::ReindexArgs;

/// Run the reindex command.
pub fn run(config: Option<&Path>, args: &ReindexArgs) {
    // Load configuration
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    crate::logging::init(&rc);

    // Discover note files
    let walker = match NotesWalker::new(&rc.notes_root) {
        Ok(walker) => walker,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let files = match walker.walk() {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error walking notes: {}", e);
            std::process::exit(1);
        }
    };

    println!("Indexing notes: {}", rc.notes_root.display());
    if args.verbose {
        for file in &files {
            println!("  {}", file.full_path.display());
        }
    }

    // Build and install the new generation
    let store = IndexStore::open(&rc.index_dir);
    let builder = IndexBuilder::new(&store);
    match builder.rebuild(&files) {
        Ok(stats) => {
            println!();
            println!("Indexing complete:");
            println!("  Files found:    {}", stats.files_found);
            println!("  Notes indexed:  {}", stats.notes_indexed);
            if stats.notes_skipped > 0 {
                println!("  Notes skipped:  {}", stats.notes_skipped);
            }
            println!("  Terms indexed:  {}", stats.terms_indexed);
            println!("  Duration:       {}ms", stats.duration_ms);
            println!();
            println!("Index stored at: {}", store.location().display());
        }
        Err(e) => {
            eprintln!("Error during indexing: {}", e);
            std::process::exit(1);
        }
    }
}
