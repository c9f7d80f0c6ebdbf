//! CLI for the anonymisation engine: scan a file or stdin, print the
//! anonymised text or the full scan result as JSON.

use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tarnkappe::{PiiType, ScanOptions, Scanner};

#[derive(Parser)]
#[command(name = "tarnkappe", version, about = "Anonymise PII in German text")]
struct Cli {
    /// File to scan; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Emit the full scan result as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Print the placeholder → original mapping after the text.
    #[arg(long)]
    mapping: bool,

    /// Disable a detector (repeatable), e.g. --disable NAME.
    #[arg(long, value_name = "TYPE")]
    disable: Vec<String>,

    /// Extra whitelist name that must not be anonymised (repeatable).
    #[arg(long, value_name = "NAME")]
    allow_name: Vec<String>,

    /// Run only the listed detectors (repeatable), e.g. --only IBAN.
    #[arg(long, value_name = "TYPE", conflicts_with = "disable")]
    only: Vec<String>,
}

fn parse_types(raw: &[String]) -> Result<Vec<PiiType>> {
    raw.iter()
        .map(|s| s.parse::<PiiType>().map_err(anyhow::Error::msg))
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut scanner = Scanner::builder()
        .extra_whitelist_names(cli.allow_name.clone())
        .build()?;
    for pii_type in parse_types(&cli.disable)? {
        scanner.disable_detector(pii_type);
    }

    let only = parse_types(&cli.only)?;
    let result = if only.is_empty() {
        scanner.scan(&text)
    } else {
        let options = ScanOptions {
            detectors: Some(only.into_iter().collect::<HashSet<_>>()),
            ..Default::default()
        };
        scanner.scan_with(&text, &options)
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.anonymised_text);
        if !result.anonymised_text.ends_with('\n') {
            println!();
        }
        if cli.mapping {
            eprintln!("{}", serde_json::to_string_pretty(&result.mapping)?);
        }
    }

    Ok(())
}
