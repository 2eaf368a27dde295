//! Cursor and selection bias.
//!
//! A text edit made at a known caret or over a known selection is a single
//! splice. When the caller says where the caret was, the splice implied by
//! the caret is tried first; among the equally short scripts this is the one
//! that keeps the edit next to the caret. A splice that does not reproduce
//! both texts is ignored and the canonical script is used instead.

use serde::{Deserialize, Serialize};

use crate::error::DiffError;
use crate::op::{Operation, Utf16Script};
use crate::unicode::{ends_with_pair_start, starts_with_pair_end};

// ── Types ─────────────────────────────────────────────────────────────────

/// A span of text in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub index: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// A zero-length selection.
    pub fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }

    pub fn from_bounds(start: usize, end: usize) -> Result<Self, DiffError> {
        if end < start {
            return Err(DiffError::ReversedSelection { start, end });
        }
        Ok(Self { index: start, length: end - start })
    }

    /// One past the last unit, or `None` when it does not fit in `usize`.
    pub fn end(&self) -> Option<usize> {
        self.index.checked_add(self.length)
    }

    pub fn is_caret(&self) -> bool {
        self.length == 0
    }

    fn validate(&self, text_len: usize) -> Result<(), DiffError> {
        match self.end() {
            Some(end) if end <= text_len => Ok(()),
            _ => Err(DiffError::InvalidSelection {
                index: self.index,
                length: self.length,
                text_len,
            }),
        }
    }
}

/// Where the caret or selection sat before and after the edit.
///
/// In JSON a bare number is an old-text caret; an object carries
/// `oldRange` and an optional `newRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CursorInfo {
    Index(usize),
    Selections {
        #[serde(rename = "oldRange")]
        old: Selection,
        #[serde(rename = "newRange", default)]
        new: Option<Selection>,
    },
}

impl From<usize> for CursorInfo {
    fn from(index: usize) -> Self {
        CursorInfo::Index(index)
    }
}

impl From<(Selection, Selection)> for CursorInfo {
    fn from((old, new): (Selection, Selection)) -> Self {
        CursorInfo::Selections { old, new: Some(new) }
    }
}

impl CursorInfo {
    /// The old selection and the optional new one.
    pub fn ranges(&self) -> (Selection, Option<Selection>) {
        match *self {
            CursorInfo::Index(index) => (Selection::caret(index), None),
            CursorInfo::Selections { old, new } => (old, new),
        }
    }

    /// Checks the cursor against both texts (lengths in code units).
    pub fn validate(&self, old_len: usize, new_len: usize) -> Result<(), DiffError> {
        let (old, new) = self.ranges();
        old.validate(old_len)?;
        match new {
            Some(new) => new.validate(new_len),
            None if !old.is_caret() => Err(DiffError::InconsistentCursorInput),
            None => Ok(()),
        }
    }
}

// ── Splice detection ──────────────────────────────────────────────────────

fn make_edit_splice(before: &[u16], old_middle: &[u16], new_middle: &[u16], after: &[u16]) -> Option<Utf16Script> {
    if ends_with_pair_start(before) || starts_with_pair_end(after) {
        return None;
    }
    let diff: Utf16Script = [
        (Operation::Equal, before),
        (Operation::Delete, old_middle),
        (Operation::Insert, new_middle),
        (Operation::Equal, after),
    ]
    .into_iter()
    .filter(|(_, text)| !text.is_empty())
    .map(|(op, text)| (op, text.to_vec()))
    .collect();
    Some(diff)
}

/// Insert or delete that ends at the old caret (typing, backspace).
fn edit_before(old: &[u16], new: &[u16], old_cursor: usize, new_cursor: Option<usize>) -> Option<Utf16Script> {
    let implied = (old_cursor + new.len()).checked_sub(old.len())?;
    if new_cursor.is_some_and(|c| c != implied) || implied > new.len() {
        return None;
    }
    let (old_before, old_after) = old.split_at(old_cursor);
    let (new_before, new_after) = new.split_at(implied);
    if new_after != old_after {
        return None;
    }
    let prefix_len = old_cursor.min(implied);
    if old_before[..prefix_len] != new_before[..prefix_len] {
        return None;
    }
    make_edit_splice(
        &old_before[..prefix_len],
        &old_before[prefix_len..],
        &new_before[prefix_len..],
        old_after,
    )
}

/// Insert or delete that starts at the old caret (forward delete).
fn edit_after(old: &[u16], new: &[u16], cursor: usize, new_cursor: Option<usize>) -> Option<Utf16Script> {
    if new_cursor.is_some_and(|c| c != cursor) || cursor > new.len() {
        return None;
    }
    let (old_before, old_after) = old.split_at(cursor);
    let (new_before, new_after) = new.split_at(cursor);
    if new_before != old_before {
        return None;
    }
    let suffix_len = old_after.len().min(new_after.len());
    let old_suffix = &old_after[old_after.len() - suffix_len..];
    let new_suffix = &new_after[new_after.len() - suffix_len..];
    if old_suffix != new_suffix {
        return None;
    }
    make_edit_splice(
        old_before,
        &old_after[..old_after.len() - suffix_len],
        &new_after[..new_after.len() - suffix_len],
        old_suffix,
    )
}

/// Replacement of exactly the old selection.
fn replace_range(old: &[u16], new: &[u16], range: Selection) -> Option<Utf16Script> {
    let end = range.end()?;
    let old_prefix = &old[..range.index];
    let old_suffix = &old[end..];
    if new.len() < old_prefix.len() + old_suffix.len() {
        return None;
    }
    let new_suffix_start = new.len() - old_suffix.len();
    if &new[..old_prefix.len()] != old_prefix || &new[new_suffix_start..] != old_suffix {
        return None;
    }
    make_edit_splice(
        old_prefix,
        &old[range.index..end],
        &new[old_prefix.len()..new_suffix_start],
        old_suffix,
    )
}

/// The script implied by the cursor, if the texts agree with it.
///
/// `cursor` must already be validated against both texts.
pub(crate) fn find_cursor_edit_diff(old: &[u16], new: &[u16], cursor: &CursorInfo) -> Option<Utf16Script> {
    let (old_range, new_range) = cursor.ranges();
    if old_range.is_caret() && new_range.is_none_or(|r| r.is_caret()) {
        let old_cursor = old_range.index;
        let new_cursor = new_range.map(|r| r.index);
        if let Some(diff) = edit_before(old, new, old_cursor, new_cursor) {
            tracing::trace!(old_cursor, "caret splice before cursor");
            return Some(diff);
        }
        if let Some(diff) = edit_after(old, new, old_cursor, new_cursor) {
            tracing::trace!(old_cursor, "caret splice after cursor");
            return Some(diff);
        }
    }
    if !old_range.is_caret() && new_range.is_some() {
        if let Some(diff) = replace_range(old, new, old_range) {
            tracing::trace!(index = old_range.index, length = old_range.length, "selection splice");
            return Some(diff);
        }
    }
    tracing::debug!(?cursor, "cursor does not describe a single splice; using canonical diff");
    None
}
