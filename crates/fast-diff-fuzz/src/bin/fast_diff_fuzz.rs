//! `fast-diff-fuzz`: diff thousands of random string pairs and check every
//! edit script.
//!
//! Usage:
//!   fast-diff-fuzz [--iterations N] [--length N] [--alphabet S] [--emoji] [--seed N]

use clap::Parser;
use fast_diff_fuzz::{run, FuzzConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fast-diff-fuzz", about = "Seeded invariant fuzzing for fast-diff")]
struct Args {
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,
    #[arg(long, default_value_t = 100)]
    length: usize,
    #[arg(long, default_value = "GATTACA")]
    alphabet: String,
    /// Generate emoji-heavy strings instead of using the alphabet.
    #[arg(long)]
    emoji: bool,
    /// Replay a previous run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = FuzzConfig {
        iterations: args.iterations,
        length: args.length,
        alphabet: args.alphabet,
        emoji: args.emoji,
        seed: Some(seed),
    };

    println!("Running computing {} diffs with seed {seed}...", config.iterations);
    match run(&config) {
        Ok(report) => {
            println!("Checked {} scripts", report.scripts);
            println!("Success!");
        }
        Err(failure) => {
            println!("Old {:?}", failure.old);
            println!("New {:?}", failure.new);
            if let Some(cursor) = &failure.cursor {
                match serde_json::to_string(cursor) {
                    Ok(json) => println!("Cursor {json}"),
                    Err(_) => println!("Cursor {cursor:?}"),
                }
            }
            eprintln!("{failure}");
            std::process::exit(1);
        }
    }
}
