//! `fast-diff`: print the edit script between two files as JSON.
//!
//! Usage:
//!   fast-diff <old-file> <new-file> [--cursor '<json>']
//!
//! The cursor is either a bare old-text caret (`3`) or
//! `{"oldRange":{"index":0,"length":5},"newRange":{"index":1,"length":0}}`.
//! Output is an array of `[op, text]` pairs with `op` in `-1`, `0`, `1`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use fast_diff::{diff_main, CursorInfo};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fast-diff", about = "Shortest edit script between two text files")]
struct Args {
    /// File holding the old text.
    old: PathBuf,
    /// File holding the new text.
    new: PathBuf,
    /// Cursor or selection bias, as JSON.
    #[arg(long)]
    cursor: Option<String>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn run(args: &Args) -> Result<String, String> {
    let old = std::fs::read_to_string(&args.old).map_err(|e| format!("{}: {e}", args.old.display()))?;
    let new = std::fs::read_to_string(&args.new).map_err(|e| format!("{}: {e}", args.new.display()))?;
    let cursor = match &args.cursor {
        Some(raw) => Some(serde_json::from_str::<CursorInfo>(raw).map_err(|e| format!("--cursor: {e}"))?),
        None => None,
    };
    let script = diff_main(&old, &new, cursor).map_err(|e| e.to_string())?;
    tracing::debug!(tuples = script.len(), "diff computed");
    let json = if args.pretty {
        serde_json::to_string_pretty(&script)
    } else {
        serde_json::to_string(&script)
    };
    json.map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{out}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
