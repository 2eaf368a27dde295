use thiserror::Error;

/// Failures of the cursor-biased entry points.
///
/// Bias-free diffing cannot fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("invalid selection: {index}+{length} exceeds text length {text_len}")]
    InvalidSelection {
        index: usize,
        length: usize,
        text_len: usize,
    },
    #[error("invalid selection: end {end} precedes start {start}")]
    ReversedSelection { start: usize, end: usize },
    #[error("inconsistent cursor input: old range has no new selection")]
    InconsistentCursorInput,
}
