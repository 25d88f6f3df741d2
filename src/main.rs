// file: src/main.rs
// description: commandline demonstration of the document lookup bridge
// reference: application bootstrap, non-core glue around the library

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use docbridge::utils::logging::{format_success, format_warning, init_logger};
use docbridge::{IndexRetriever, MemoryDataStore, SearchIndex};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "docbridge")]
#[command(version = "0.1.0")]
#[command(about = "Look up a stored document and search its content", long_about = None)]
struct Cli {
    /// Key of the document to retrieve
    key: String,

    /// JSON file with a {"key": "document", ...} object to seed the store;
    /// built-in sample documents are used when omitted
    #[arg(short, long, value_name = "FILE")]
    documents: Option<PathBuf>,

    /// Term the demo index reports as a match when the document contains it
    #[arg(short, long, value_name = "TERM", default_values = ["document", "content"])]
    term: Vec<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Demonstration-only search index: reports which of the configured terms
/// occur in the document body. Stands in for a real external index.
struct SubstringIndex {
    terms: Vec<String>,
}

impl SearchIndex for SubstringIndex {
    type Matches = Vec<String>;

    fn search(&self, content: &str) -> docbridge::Result<Vec<String>> {
        Ok(self
            .terms
            .iter()
            .filter(|term| content.contains(term.as_str()))
            .cloned()
            .collect())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    let mut store = MemoryDataStore::new();
    match cli.documents {
        Some(path) => {
            info!("Seeding store from {}", path.display());
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let documents: HashMap<String, String> =
                serde_json::from_str(&raw).context("Document file must be a JSON string map")?;
            for (key, document) in documents {
                store.add_document(key, document);
            }
        }
        None => {
            info!("Seeding store with built-in sample documents");
            store.add_document("doc1", "This is the content of document 1.");
            store.add_document("doc2", "This is the content of document 2.");
        }
    }

    let index = SubstringIndex { terms: cli.term };
    let retriever = IndexRetriever::new(&index, &store);

    match retriever.retrieve(&cli.key)? {
        Some(matches) => {
            println!(
                "{}",
                format_success(&format!("{} match(es) for '{}'", matches.len(), cli.key))
            );
            for matched in matches {
                println!("  {}", matched);
            }
        }
        None => {
            println!(
                "{}",
                format_warning(&format!("No document stored under '{}'", cli.key))
            );
        }
    }

    Ok(())
}
