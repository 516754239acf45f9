//! journal-sentiment - stream a sentiment analysis of a journal entry to stdout
//!
//! Usage:
//!   journal-sentiment                    Analyse the built-in sample entry
//!   journal-sentiment "<entry text>"     Analyse the given text
//!   journal-sentiment --file <path>      Analyse the contents of a file
//!   journal-sentiment -                  Analyse standard input

use journal_sentiment::{ClientConfig, RequesterBuilder, DEFAULT_JOURNAL_ENTRY};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq, Eq)]
enum EntrySource {
    Default,
    Text(String),
    File(PathBuf),
    Stdin,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Analyse(EntrySource),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    match args {
        [] => Ok(Command::Analyse(EntrySource::Default)),
        [flag] if flag == "--help" || flag == "-h" => Ok(Command::Help),
        [flag] if flag == "--version" || flag == "-V" => Ok(Command::Version),
        [flag] if flag == "--file" => Err("--file requires a path".to_string()),
        [flag, path] if flag == "--file" => {
            Ok(Command::Analyse(EntrySource::File(PathBuf::from(path))))
        }
        [dash] if dash == "-" => Ok(Command::Analyse(EntrySource::Stdin)),
        [flag] if flag.starts_with("--") => Err(format!("Unknown option: {flag}")),
        [text] => Ok(Command::Analyse(EntrySource::Text(text.clone()))),
        _ => Err("expected at most one journal entry".to_string()),
    }
}

fn print_usage() {
    println!(
        r#"journal-sentiment - stream a sentiment analysis of a journal entry

USAGE:
    journal-sentiment [<ENTRY> | --file <PATH> | -]

ARGS:
    <ENTRY>            Journal entry text (default: built-in sample entry)
    --file <PATH>      Read the journal entry from a file
    -                  Read the journal entry from standard input

ENVIRONMENT:
    GROQ_API_KEY            API key (required)
    GROQ_BASE_URL           Service base URL (default https://api.groq.com/openai/v1)
    GROQ_MODEL              Model id (default llama-3.3-70b-versatile)
    AI_HTTP_TIMEOUT_SECS    Request timeout in seconds (default: none)
    AI_PROXY_URL            HTTP(S) proxy
    RUST_LOG                Log filter for stderr diagnostics (default: warn)"#
    );
}

fn read_entry(source: EntrySource) -> std::io::Result<String> {
    match source {
        EntrySource::Default => Ok(DEFAULT_JOURNAL_ENTRY.to_string()),
        EntrySource::Text(text) => Ok(text),
        EntrySource::File(path) => std::fs::read_to_string(path),
        EntrySource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

async fn run(source: EntrySource) -> journal_sentiment::Result<()> {
    let entry = read_entry(source)?;
    let config = ClientConfig::from_env()?;
    debug!(?config, "loaded configuration");

    let requester = RequesterBuilder::new().config(config).build()?;
    requester.request_analysis_stdout(&entry).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries only model text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = match parse_args(&args) {
        Ok(Command::Analyse(source)) => source,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Version) => {
            println!("journal-sentiment {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(msg) => {
            eprintln!("Error: {msg}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(e) = run(source).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
