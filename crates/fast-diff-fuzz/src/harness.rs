//! Seeded end-to-end runs over random string pairs.

use fast_diff::{diff, diff_with_cursor, CursorInfo, DiffError};
use thiserror::Error;

use crate::check::{check_script, InvariantViolation};
use crate::fuzzer::Fuzzer;

/// Parameters of one fuzz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzConfig {
    /// Number of consecutive pairs diffed.
    pub iterations: usize,
    /// Characters per generated string.
    pub length: usize,
    pub alphabet: String,
    /// Emoji-heavy strings instead of `alphabet`.
    pub emoji: bool,
    /// `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            length: 100,
            alphabet: "GATTACA".to_string(),
            emoji: false,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzReport {
    pub seed: u64,
    pub iterations: usize,
    /// Scripts checked, bias-free and cursor-biased together.
    pub scripts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error(transparent)]
    Diff(#[from] DiffError),
}

/// The first pair whose script broke an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("iteration {iteration} with seed {seed}: {cause}")]
pub struct FuzzFailure {
    pub seed: u64,
    pub iteration: usize,
    pub old: String,
    pub new: String,
    pub cursor: Option<CursorInfo>,
    #[source]
    pub cause: FailureCause,
}

/// Generates `iterations + 1` strings and diffs each consecutive pair.
///
/// Every pair is diffed without bias, then the first string of the pair is
/// edited by one random keystroke and diffed again with the matching cursor.
pub fn run(config: &FuzzConfig) -> Result<FuzzReport, FuzzFailure> {
    let fuzzer = Fuzzer::new(config.seed);
    let seed = fuzzer.seed;
    tracing::info!(seed, iterations = config.iterations, "generating strings");
    let strings: Vec<String> = (0..=config.iterations)
        .map(|_| {
            if config.emoji {
                fuzzer.random_emoji_string(config.length)
            } else {
                fuzzer.random_string(config.length, &config.alphabet)
            }
        })
        .collect();

    let fail = |iteration: usize, old: &str, new: &str, cursor: Option<CursorInfo>, cause: FailureCause| FuzzFailure {
        seed,
        iteration,
        old: old.to_string(),
        new: new.to_string(),
        cursor,
        cause,
    };

    let mut scripts = 0;
    for (iteration, pair) in strings.windows(2).enumerate() {
        let (old, new) = (&pair[0], &pair[1]);
        let script = diff(old, new);
        check_script(old, new, &script).map_err(|e| fail(iteration, old, new, None, e.into()))?;

        let (edited, cursor) = fuzzer.caret_edit(old, &config.alphabet);
        let script = diff_with_cursor(old, &edited, cursor)
            .map_err(|e| fail(iteration, old, &edited, Some(cursor), e.into()))?;
        check_script(old, &edited, &script).map_err(|e| fail(iteration, old, &edited, Some(cursor), e.into()))?;
        scripts += 2;
    }
    tracing::debug!(seed, scripts, "fuzz run finished");
    Ok(FuzzReport {
        seed,
        iterations: config.iterations,
        scripts,
    })
}
