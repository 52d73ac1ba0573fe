use anyhow::{Context, Result};
use clap::Parser;
use searchlite::{DocId, Document, DocumentStatus, RequestQueue, SearchEngine};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory full-text search over status-tagged documents", long_about = None)]
struct Args {
    /// JSON file with the documents to index
    #[arg(short, long, default_value = "documents.json")]
    docs: PathBuf,

    /// Query to run, e.g. "curly -dog"; repeatable
    #[arg(short, long = "query")]
    queries: Vec<String>,

    /// Space-delimited stop words; defaults to a built-in English set
    #[arg(short, long)]
    stop_words: Option<String>,

    /// Results per printed page
    #[arg(short, long, default_value_t = 2)]
    page_size: usize,

    /// Also print, per indexed document, the query words it matched
    #[arg(short, long)]
    match_words: bool,
}

// Input record for one document
#[derive(Debug, Deserialize)]
struct DocumentRecord {
    id: DocId,
    text: String,
    status: DocumentStatus,
    #[serde(default)]
    ratings: Vec<i32>,
}

fn load_documents(path: &Path) -> Result<Vec<DocumentRecord>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(records)
}

fn print_paged(documents: &[Document], page_size: usize) {
    let pages = documents.chunks(page_size.max(1));
    let page_count = pages.len();
    for (page_number, page) in pages.enumerate() {
        for document in page {
            println!("  {document}");
        }
        if page_count > 1 {
            println!("  -- page {} of {} --", page_number + 1, page_count);
        }
    }
}

fn print_match_report(engine: &SearchEngine, raw_query: &str) -> Result<()> {
    for ordinal in 0..engine.document_count() {
        let document_id = engine.document_id_at(ordinal)?;
        let matched = engine.match_document(raw_query, document_id)?;
        println!(
            "  {{ document_id = {}, status = {:?}, words = {:?} }}",
            document_id, matched.status, matched.words
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut engine = match &args.stop_words {
        Some(text) => SearchEngine::from_stop_words_text(text)?,
        None => SearchEngine::default(),
    };

    let records = load_documents(&args.docs)?;
    for record in records {
        if let Err(e) = engine.add_document(record.id, &record.text, record.status, &record.ratings)
        {
            tracing::warn!(document_id = record.id, error = %e, "skipping document");
        }
    }
    println!("Indexed {} documents", engine.document_count());

    let queries = if args.queries.is_empty() {
        vec!["curly -dog".to_string()]
    } else {
        args.queries.clone()
    };

    let mut request_queue = RequestQueue::new(&engine);
    for raw_query in &queries {
        println!();
        println!("Query: \"{raw_query}\"");
        match request_queue.add_find_request(raw_query) {
            Ok(found) if found.is_empty() => println!("  no documents found"),
            Ok(found) => print_paged(&found, args.page_size),
            Err(e) => println!("  search failed: {e}"),
        }
        if args.match_words {
            if let Err(e) = print_match_report(&engine, raw_query) {
                println!("  match report failed: {e}");
            }
        }
    }

    println!();
    println!(
        "No-result requests in the last {} searches: {}",
        searchlite::REQUEST_WINDOW_CAPACITY,
        request_queue.no_result_requests()
    );

    Ok(())
}
