//! fast-diff: shortest edit script between two strings.
//!
//! The output is tuple-for-tuple what the diff-match-patch `diff_main`
//! algorithm produces without semantic cleanup: Myers bisection with the
//! prefix/suffix, containment and half-match speedups, followed by the merge
//! pass. On top of that:
//!
//! * tuple boundaries never split a UTF-16 surrogate pair;
//! * an optional cursor or selection picks, among equally short scripts, the
//!   one that places the edit where the caret says it happened.
//!
//! All offsets and lengths are UTF-16 code units.
//!
//! ```
//! use fast_diff::{diff, diff_with_cursor, EQUAL, INSERT};
//!
//! assert_eq!(
//!     diff("abc", "ab123c"),
//!     vec![(EQUAL, "ab".to_string()), (INSERT, "123".to_string()), (EQUAL, "c".to_string())]
//! );
//! assert_eq!(
//!     diff_with_cursor("a", "aa", 0usize).unwrap(),
//!     vec![(INSERT, "a".to_string()), (EQUAL, "a".to_string())]
//! );
//! ```

pub mod affix;
mod bisect;
pub mod cursor;
mod engine;
pub mod error;
mod half_match;
mod merge;
pub mod op;
pub mod patch;
pub mod unicode;

pub use affix::{pfx, sfx};
pub use cursor::{CursorInfo, Selection};
pub use error::DiffError;
pub use op::{DiffTuple, EditScript, Operation, Utf16Script, Utf16Tuple, DELETE, EQUAL, INSERT};

use cursor::find_cursor_edit_diff;
use engine::diff_units;
use unicode::{from_utf16, utf16_units};

/// Diffs two code-unit sequences, optionally biased by a cursor.
///
/// Unpaired surrogates in the input are treated as opaque units and passed
/// through unchanged; the engine never introduces a split of its own.
pub fn diff_utf16(old: &[u16], new: &[u16], cursor: Option<CursorInfo>) -> Result<Utf16Script, DiffError> {
    if let Some(cursor) = &cursor {
        cursor.validate(old.len(), new.len())?;
    }
    if old == new {
        return Ok(diff_units(old, new, true));
    }
    if let Some(cursor) = &cursor {
        if let Some(edit) = find_cursor_edit_diff(old, new, cursor) {
            return Ok(edit);
        }
    }
    Ok(diff_units(old, new, true))
}

/// Diffs two strings, optionally biased by a cursor.
pub fn diff_main(old: &str, new: &str, cursor: Option<CursorInfo>) -> Result<EditScript, DiffError> {
    let script = diff_utf16(&utf16_units(old), &utf16_units(new), cursor)?;
    Ok(script.into_iter().map(|(op, units)| (op, from_utf16(&units))).collect())
}

/// Bias-free diff of two strings.
pub fn diff(old: &str, new: &str) -> EditScript {
    let script = diff_units(&utf16_units(old), &utf16_units(new), true);
    script.into_iter().map(|(op, units)| (op, from_utf16(&units))).collect()
}

/// Diff of two strings biased by a caret index or a selection pair.
pub fn diff_with_cursor(old: &str, new: &str, cursor: impl Into<CursorInfo>) -> Result<EditScript, DiffError> {
    diff_main(old, new, Some(cursor.into()))
}
