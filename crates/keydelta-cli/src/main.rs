// SPDX-License-Identifier: MIT OR Apache-2.0
//! keydelta CLI binary - report added and changed keys between two JSON documents

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use keydelta_cli::diff::{Argument, DeltaSummary, compute_delta};
use keydelta_cli::logging::{self, Profile};
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "keydelta")]
#[command(version, about, long_about = None)]
struct Args {
    /// Original JSON document (`-` reads stdin)
    #[arg(value_name = "ORIGINAL")]
    original: PathBuf,

    /// Updated JSON document (`-` reads stdin)
    #[arg(value_name = "UPDATED")]
    updated: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(short = 'c', long = "compact")]
    compact: bool,

    /// Print added/modified counts to stderr
    #[arg(long)]
    summary: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Self::Development,
            LogFormat::Json => Self::Production,
        }
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.log_format.into());

    if let Err(e) = run(&args) {
        tracing::error!(error = %format!("{e:#}"), "keydelta failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if is_stdin(&args.original) && is_stdin(&args.updated) {
        bail!("only one of ORIGINAL and UPDATED can be read from stdin");
    }

    let original = load(&args.original, Argument::Original)?;
    let updated = load(&args.updated, Argument::Updated)?;

    let delta = compute_delta(&original, &updated)?;
    let summary = DeltaSummary::classify(&original, &delta)?;
    tracing::info!(
        added = summary.added,
        modified = summary.modified,
        "delta computed"
    );

    let delta = Value::Object(delta);
    let output = if args.compact {
        serde_json::to_string(&delta)?
    } else {
        serde_json::to_string_pretty(&delta)?
    };
    write_output(args.output.as_deref(), &output)?;

    if args.summary {
        eprintln!("{summary}");
    }
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn load(path: &Path, argument: Argument) -> anyhow::Result<Value> {
    let source = describe(path);
    let text = if is_stdin(path) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .with_context(|| format!("failed to read {argument} document {source}"))?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read {argument} document {source}"))?
    };
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {argument} document {source}"))
}

/// Where a document comes from, for error messages
fn describe(path: &Path) -> String {
    if is_stdin(path) {
        "from stdin".to_string()
    } else {
        path.display().to_string()
    }
}

fn write_output(path: Option<&Path>, output: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{output}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}")?;
            stdout.flush()?;
            Ok(())
        }
    }
}
