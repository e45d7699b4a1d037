//! fix-sc2155 - Split declarations from command-substitution assignments
//!
//! ```bash
//! # Dry-run (show diff only)
//! fix-sc2155 main.sh lib/*.sh
//!
//! # Apply fixes
//! fix-sc2155 --apply main.sh lib/*.sh
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use script_hygiene::{fix_file, logging, Mode};

/// Fix SC2155 ShellCheck warnings by separating declarations from assignments
#[derive(Parser, Debug)]
#[command(name = "fix-sc2155", version)]
struct Cli {
    /// Apply fixes (default: dry-run showing diff)
    #[arg(long)]
    apply: bool,

    /// Shell files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let mode = if cli.apply { Mode::Apply } else { Mode::DryRun };
    let mut failed = false;

    for path in &cli.files {
        let fix = match fix_file(path, mode) {
            Ok(fix) => fix,
            Err(e) => {
                tracing::error!("{}", e);
                failed = true;
                continue;
            }
        };

        match fix.diff {
            Some(diff) => {
                println!("{}", diff);
                if fix.applied {
                    println!("✓ Applied fixes to {}", path.display());
                }
            }
            None => println!("✓ No SC2155 fixes needed in {}", path.display()),
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
