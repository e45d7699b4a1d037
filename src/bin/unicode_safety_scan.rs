//! unicode-safety-scan - Detect Trojan Source and hidden Unicode characters
//!
//! Bidi control characters are forbidden in every file. Hidden format
//! characters and look-alike whitespace are forbidden in strict files
//! (shell, config, allowlist) and only warned about in docs.
//!
//! ```bash
//! unicode-safety-scan                 # every file from `git ls-files`
//! unicode-safety-scan --warn-docs     # also print docs warnings
//! unicode-safety-scan path/to/file
//! ```
//!
//! Exits 1 if forbidden characters are found, 0 otherwise.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use script_hygiene::{logging, Config, Report, Scanner, Status, Targets};

/// Exit code for failures unrelated to findings (bad config, no git listing)
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Scan files for bidi controls and hidden Unicode characters
#[derive(Parser, Debug)]
#[command(name = "unicode-safety-scan", version)]
struct Cli {
    /// Print warnings for docs files; otherwise docs warnings are suppressed
    #[arg(long)]
    warn_docs: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Optional paths to scan; default scans `git ls-files`
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::from(EXIT_USAGE);
            }
        },
        None => Config::load(),
    };

    let targets = match Targets::from_args(cli.paths).resolve() {
        Ok(targets) => targets,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let warn_docs = cli.warn_docs || config.scan.warn_docs;
    let mut report = Report::new(warn_docs, config.scan.snippet_limit);
    Scanner::new(config.classifier()).scan_all(&targets, &mut report);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match cli.format {
        Format::Text => report.write_text(&mut out),
        Format::Json => writeln!(out, "{}", report.to_json()),
    };
    if let Err(e) = written.and_then(|_| out.flush()) {
        tracing::error!("failed to write report: {}", e);
    }

    let status = report.status();
    match status {
        Status::Failed => {
            eprintln!("\nUnicode safety scan: FAILED (forbidden characters found).");
        }
        Status::WarningsOnly => {
            eprintln!("\nUnicode safety scan: warnings only (docs).");
        }
        Status::Ok => {}
    }
    if status != Status::Failed && cli.format == Format::Text {
        if let Err(e) = writeln!(out, "Unicode safety scan: OK.").and_then(|_| out.flush()) {
            tracing::error!("failed to write report: {}", e);
        }
    }

    ExitCode::from(status.exit_code() as u8)
}
