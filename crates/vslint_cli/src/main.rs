//! vslint — signal-level lint for Verilog modules.
//!
//! Checks each module of the given files for unused signals, drive/kind
//! mismatches, and undefined references, and reports conflicting
//! declarations as structural errors.

#![warn(missing_docs)]

mod lint;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `vslint`.
#[derive(Parser, Debug)]
#[command(name = "vslint", version, about = "Signal-level lint for Verilog")]
pub struct Cli {
    /// Verilog source files to lint.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Rule names to suppress (e.g., `--allow unused-signal`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rule names to promote to errors (e.g., `--deny undefined-reference`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics; overrides the config file.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Suppress the summary line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Control colored output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `vslint.toml` configuration file (default: `./vslint.toml`).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` against the environment.
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Auto => std::env::var("TERM").is_ok(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match lint::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}
