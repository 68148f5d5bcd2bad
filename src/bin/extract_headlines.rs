//! Headline extraction demo
//!
//! Reads a page-layout JSON document (the format produced by the external
//! page-layout collaborator) and prints the detected page titles and headline
//! candidates, plus a JSON dump of the full result map.
//!
//! Usage: extract_headlines <layout.json> [--json]

use newsprint::extractor::extract_headings;
use newsprint::provider::JsonLayoutProvider;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("Usage: extract_headlines <layout.json> [--json]");
        return ExitCode::FAILURE;
    };
    let json_output = args.iter().any(|a| a == "--json");

    let provider = match JsonLayoutProvider::open(path) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Failed to load layout {}: {}", path, e);
            return ExitCode::FAILURE;
        },
    };

    let headings = match extract_headings(&provider) {
        Ok(headings) => headings,
        Err(e) => {
            eprintln!("Extraction failed: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if json_output {
        match serde_json::to_string_pretty(&headings) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            },
        }
        return ExitCode::SUCCESS;
    }

    for (index, page) in &headings {
        println!("Page {}:", index + 1);
        if !page.page_title.is_empty() {
            println!("  Title: {}", page.page_title);
        }
        if page.headlines.is_empty() {
            println!("  (no headlines)");
        }
        for (i, headline) in page.headlines.iter().enumerate() {
            println!("  {}. {}", i + 1, headline);
        }
    }

    ExitCode::SUCCESS
}
