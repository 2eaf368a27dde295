//! Helpers for reading an edit script back.

use crate::merge::cleanup_merge;
use crate::op::{EditScript, Operation, Utf16Script};
use crate::unicode::{from_utf16, utf16_units};

/// Reconstructs the old text from a script.
pub fn src(script: &EditScript) -> String {
    let mut txt = String::new();
    for (op, s) in script {
        if *op != Operation::Insert {
            txt.push_str(s);
        }
    }
    txt
}

/// Reconstructs the new text from a script.
pub fn dst(script: &EditScript) -> String {
    let mut txt = String::new();
    for (op, s) in script {
        if *op != Operation::Delete {
            txt.push_str(s);
        }
    }
    txt
}

/// A script transforming the new text back into the old one.
pub fn invert(script: &EditScript) -> EditScript {
    script.iter().map(|(op, s)| (op.inverse(), s.clone())).collect()
}

/// Total number of inserted and deleted UTF-16 code units.
pub fn edit_cost(script: &EditScript) -> usize {
    script
        .iter()
        .filter(|(op, _)| *op != Operation::Equal)
        .map(|(_, s)| s.encode_utf16().count())
        .sum()
}

/// Rewrites a script for the same two texts into merged form: one delete and
/// one insert between equalities, shared edges folded into the equalities and
/// single edits slid as far left as they go.
pub fn normalize(script: &EditScript) -> EditScript {
    let mut units: Utf16Script = script.iter().map(|(op, s)| (*op, utf16_units(s))).collect();
    cleanup_merge(&mut units, true);
    units.into_iter().map(|(op, u)| (op, from_utf16(&u))).collect()
}

/// Walks the script from the end, reporting each edit against the old text.
///
/// `src_len` is the old text length in UTF-16 code units; positions given to
/// the callbacks are code-unit offsets into the old text. Walking backwards
/// keeps earlier offsets valid while the callbacks mutate a buffer.
pub fn apply<FIns, FDel>(script: &EditScript, src_len: usize, mut on_insert: FIns, mut on_delete: FDel)
where
    FIns: FnMut(usize, &str),
    FDel: FnMut(usize, usize, &str),
{
    let mut pos = src_len;
    for (op, s) in script.iter().rev() {
        match op {
            Operation::Equal => pos = pos.saturating_sub(s.encode_utf16().count()),
            Operation::Insert => on_insert(pos, s),
            Operation::Delete => {
                let len = s.encode_utf16().count();
                pos = pos.saturating_sub(len);
                on_delete(pos, len, s);
            }
        }
    }
}
