//! Code-unit level diff driver: trim, compute the middle, rebuild, merge.

use crate::affix::trim;
use crate::bisect::bisect;
use crate::half_match::half_match;
use crate::merge::cleanup_merge;
use crate::op::{Operation, Utf16Script};
use crate::unicode::find_units;

/// Diffs two code-unit sequences.
///
/// `fix_unicode` is only set for the outermost call; recursive calls on
/// sub-problems leave surrogate repair to it.
pub fn diff_units(old: &[u16], new: &[u16], fix_unicode: bool) -> Utf16Script {
    if old == new {
        if old.is_empty() {
            return vec![];
        }
        return vec![(Operation::Equal, old.to_vec())];
    }

    let trimmed = trim(old, new);
    let mut diff = compute(trimmed.old_middle, trimmed.new_middle);
    if !trimmed.prefix.is_empty() {
        diff.insert(0, (Operation::Equal, trimmed.prefix.to_vec()));
    }
    if !trimmed.suffix.is_empty() {
        diff.push((Operation::Equal, trimmed.suffix.to_vec()));
    }
    cleanup_merge(&mut diff, fix_unicode);
    diff
}

/// Diffs two texts known to share no prefix or suffix.
fn compute(a: &[u16], b: &[u16]) -> Utf16Script {
    if a.is_empty() {
        return vec![(Operation::Insert, b.to_vec())];
    }
    if b.is_empty() {
        return vec![(Operation::Delete, a.to_vec())];
    }

    let a_longer = a.len() > b.len();
    let (long, short) = if a_longer { (a, b) } else { (b, a) };
    if let Some(i) = find_units(long, short, 0) {
        // Shorter text is inside the longer text.
        let edit = if a_longer { Operation::Delete } else { Operation::Insert };
        return vec![
            (edit, long[..i].to_vec()),
            (Operation::Equal, short.to_vec()),
            (edit, long[i + short.len()..].to_vec()),
        ];
    }

    if short.len() == 1 {
        // After the containment check the single unit cannot be an equality.
        return vec![(Operation::Delete, a.to_vec()), (Operation::Insert, b.to_vec())];
    }

    if let Some(hm) = half_match(a, b) {
        let mut diff = diff_units(hm.old_a, hm.new_a, false);
        diff.push((Operation::Equal, hm.common.to_vec()));
        diff.extend(diff_units(hm.old_b, hm.new_b, false));
        return diff;
    }

    bisect(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::utf16_units;

    #[test]
    fn containment_speedup() {
        let diff = compute(&utf16_units("abc"), &utf16_units("xabcy"));
        let kinds: Vec<Operation> = diff.iter().map(|(op, _)| *op).collect();
        assert_eq!(kinds, vec![Operation::Insert, Operation::Equal, Operation::Insert]);
        assert_eq!(diff[0].1, utf16_units("x"));
        assert_eq!(diff[2].1, utf16_units("y"));
    }

    #[test]
    fn single_unit_speedup() {
        let diff = compute(&utf16_units("a"), &utf16_units("bc"));
        assert_eq!(
            diff,
            vec![(Operation::Delete, utf16_units("a")), (Operation::Insert, utf16_units("bc"))]
        );
    }

    #[test]
    fn inner_calls_keep_split_pairs() {
        // Repair only happens at the outermost level.
        let old = utf16_units("👨🏽");
        let new = utf16_units("👩🏽");
        let raw = diff_units(&old, &new, false);
        assert_eq!(raw[0], (Operation::Equal, vec![0xd83d]));
        let fixed = diff_units(&old, &new, true);
        assert_eq!(fixed[0], (Operation::Delete, utf16_units("👨")));
    }
}
