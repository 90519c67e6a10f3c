//! Simple CLI that reads post content from stdin and outputs JSON to stdout.
//!
//! Usage: `render_stdin [search_term] [--options <file.json>]`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use rs_zsxq_render::{highlight::highlight_term, render_document, Options};
use serde::Serialize;
use std::env;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    html: String,
    highlighted: String,
    plain_text: String,
    warnings: Vec<String>,
}

fn load_options(path: &str) -> Result<Options, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let options: Options = serde_json::from_str(&raw)?;
    options.validate()?;
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut term: Option<String> = None;
    let mut options = Options::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--options" {
            let Some(path) = args.next() else {
                eprintln!("Usage: render_stdin [search_term] [--options <file.json>]");
                std::process::exit(2);
            };
            options = load_options(&path)?;
        } else if term.is_none() {
            term = Some(arg);
        }
    }

    // Read raw bytes so a UTF-8 BOM or stray invalid bytes don't abort the run
    let mut bytes = Vec::new();
    if io::stdin().read_to_end(&mut bytes).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }
    let (content, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        tracing::warn!("stdin is not valid UTF-8, invalid sequences replaced");
    }

    let result = render_document(&content, &options);
    let highlighted = match term.as_deref() {
        Some(t) => highlight_term(&result.html, t),
        None => result.html.clone(),
    };

    let output = Output {
        html: result.html,
        highlighted,
        plain_text: result.text,
        warnings: result.warnings,
    };

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
