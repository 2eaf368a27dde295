//! Structural checks on produced edit scripts.

use fast_diff::unicode::{is_high_surrogate, is_low_surrogate, utf16_units};
use fast_diff::{EditScript, Operation, Utf16Script};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("tuple {index} has empty text")]
    EmptyTuple { index: usize },
    #[error("equal and delete texts do not rebuild the old text")]
    OldTextMismatch,
    #[error("equal and insert texts do not rebuild the new text")]
    NewTextMismatch,
    #[error("tuples {index} and {} both carry operation {op}", .index + 1)]
    RepeatedOperation { index: usize, op: Operation },
    #[error("insert at tuple {index} is followed by a delete")]
    InsertBeforeDelete { index: usize },
    #[error("tuple {index} starts or ends inside a surrogate pair")]
    SplitSurrogatePair { index: usize },
}

/// Checks a code-unit script against the texts it was computed from.
///
/// The surrogate check assumes well-formed input: a tuple may not begin with
/// a low surrogate or end with a high one.
pub fn check_units(old: &[u16], new: &[u16], script: &Utf16Script) -> Result<(), InvariantViolation> {
    let mut rebuilt_old = Vec::with_capacity(old.len());
    let mut rebuilt_new = Vec::with_capacity(new.len());
    for (index, (op, text)) in script.iter().enumerate() {
        let (Some(&first), Some(&last)) = (text.first(), text.last()) else {
            return Err(InvariantViolation::EmptyTuple { index });
        };
        if is_low_surrogate(first) || is_high_surrogate(last) {
            return Err(InvariantViolation::SplitSurrogatePair { index });
        }
        match op {
            Operation::Delete => rebuilt_old.extend_from_slice(text),
            Operation::Insert => rebuilt_new.extend_from_slice(text),
            Operation::Equal => {
                rebuilt_old.extend_from_slice(text);
                rebuilt_new.extend_from_slice(text);
            }
        }
    }
    if rebuilt_old != old {
        return Err(InvariantViolation::OldTextMismatch);
    }
    if rebuilt_new != new {
        return Err(InvariantViolation::NewTextMismatch);
    }
    for (index, pair) in script.windows(2).enumerate() {
        let (a, b) = (pair[0].0, pair[1].0);
        if a == b {
            return Err(InvariantViolation::RepeatedOperation { index, op: a });
        }
        if a == Operation::Insert && b == Operation::Delete {
            return Err(InvariantViolation::InsertBeforeDelete { index });
        }
    }
    Ok(())
}

/// Checks a string script. A tuple that split a surrogate pair would have
/// been decoded lossily and fails the rebuild checks.
pub fn check_script(old: &str, new: &str, script: &EditScript) -> Result<(), InvariantViolation> {
    let units: Utf16Script = script.iter().map(|(op, text)| (*op, utf16_units(text))).collect();
    check_units(&utf16_units(old), &utf16_units(new), &units)
}
