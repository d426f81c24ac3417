use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prakrit_analyzer_lib::{analyze_input, output, Dictionary, ErrorReport, Report};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prakrit-analyzer", about = "Prakrit verb form analyzer")]
struct Cli {
    /// Verb form to analyze (Harvard-Kyoto or Devanagari). If omitted, reads one form per line from stdin.
    input: Option<String>,

    /// Directory holding verbs.json and all_verb_forms.json. Defaults to the embedded data.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print a human-readable listing instead of JSON.
    #[arg(long)]
    text: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Show all possibilities.
    #[arg(long)]
    all: bool,

    /// Show top N possibilities.
    #[arg(short = 'n', long = "top", default_value = "5")]
    top: usize,

    /// Log level, used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let dict = match cli.data_dir {
        Some(ref dir) => Dictionary::load(dir)
            .with_context(|| format!("failed to load reference data from {}", dir.display()))?,
        None => Dictionary::new(),
    };
    tracing::info!(roots = dict.root_count(), "dictionary ready");

    match cli.input {
        Some(ref text) => process_line(text, &dict, &cli)?,
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                if !line.trim().is_empty() {
                    process_line(&line, &dict, &cli)?;
                }
            }
        }
    }

    Ok(())
}

fn process_line(line: &str, dict: &Dictionary, cli: &Cli) -> anyhow::Result<()> {
    match analyze_input(line, dict) {
        Ok(report) => {
            let report = trim_report(report, cli);
            if cli.text {
                println!("{}", output::to_text(&report));
            } else {
                println!("{}", to_json(&report, cli.pretty)?);
            }
        }
        Err(err) => {
            tracing::debug!(input = line, error = %err, "no report");
            if cli.text {
                println!("{}", output::error_to_text(&err));
            } else {
                println!("{}", to_json(&ErrorReport::from(&err), cli.pretty)?);
            }
        }
    }
    Ok(())
}

fn trim_report(mut report: Report, cli: &Cli) -> Report {
    if !cli.all {
        report.results.truncate(cli.top);
    }
    report
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("JSON serialization failed")
}
