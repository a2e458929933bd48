//! linepat -- compiles line templates into an engine pattern table.
//!
//! Usage:
//!   linepat [OPTIONS] <INPUT>
//!
//! Reads the JSON template description from INPUT (`-` for stdin) and writes
//! one row per template to stdout or `--output`. Progress goes to stderr.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use linepat::{CompilerConfig, OutputFormat};

/// Compile line templates into bit-packed engine rows.
#[derive(Debug, Parser)]
#[command(name = "linepat", version, about)]
struct Args {
    /// Template description (JSON), or - for stdin.
    input: PathBuf,

    /// Write rows to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Row layout.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print the miai group listing to stderr before compiling.
    #[arg(long)]
    list_miai: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    quiet: bool,
}

impl From<Args> for CompilerConfig {
    fn from(args: Args) -> Self {
        CompilerConfig {
            input: args.input,
            output: args.output,
            format: args.format,
            quiet: args.quiet,
            list_miai: args.list_miai,
        }
    }
}

fn main() {
    let config = CompilerConfig::from(Args::parse());

    if let Err(e) = linepat::run(&config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
