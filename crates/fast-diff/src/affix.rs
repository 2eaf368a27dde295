//! Common prefix and suffix lengths, in UTF-16 code units.
//!
//! Both functions back off by one unit rather than report a boundary that
//! falls between the halves of a surrogate pair.

use crate::unicode::{is_high_surrogate, is_low_surrogate, utf16_units};

/// Length of the common prefix of two code-unit slices.
pub fn common_prefix(a: &[u16], b: &[u16]) -> usize {
    if a.is_empty() || b.is_empty() || a[0] != b[0] {
        return 0;
    }
    let mut min = 0usize;
    let mut max = a.len().min(b.len());
    let mut mid = max;
    let mut start = 0usize;
    while min < mid {
        if a[start..mid] == b[start..mid] {
            min = mid;
            start = min;
        } else {
            max = mid;
        }
        mid = (max - min) / 2 + min;
    }
    if mid > 0 && is_high_surrogate(a[mid - 1]) {
        mid -= 1;
    }
    mid
}

/// Length of the common suffix of two code-unit slices.
pub fn common_suffix(a: &[u16], b: &[u16]) -> usize {
    let (n1, n2) = (a.len(), b.len());
    if n1 == 0 || n2 == 0 || a[n1 - 1] != b[n2 - 1] {
        return 0;
    }
    let mut min = 0usize;
    let mut max = n1.min(n2);
    let mut mid = max;
    let mut end = 0usize;
    while min < mid {
        if a[n1 - mid..n1 - end] == b[n2 - mid..n2 - end] {
            min = mid;
            end = min;
        } else {
            max = mid;
        }
        mid = (max - min) / 2 + min;
    }
    if mid > 0 && is_low_surrogate(a[n1 - mid]) {
        mid -= 1;
    }
    mid
}

/// [`common_prefix`] over two strings.
pub fn pfx(txt1: &str, txt2: &str) -> usize {
    common_prefix(&utf16_units(txt1), &utf16_units(txt2))
}

/// [`common_suffix`] over two strings.
pub fn sfx(txt1: &str, txt2: &str) -> usize {
    common_suffix(&utf16_units(txt1), &utf16_units(txt2))
}

/// The four pieces left after trimming a shared prefix and suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimmed<'a> {
    pub prefix: &'a [u16],
    pub old_middle: &'a [u16],
    pub new_middle: &'a [u16],
    pub suffix: &'a [u16],
}

/// Splits both texts into shared prefix, differing middles and shared suffix.
pub fn trim<'a>(old: &'a [u16], new: &'a [u16]) -> Trimmed<'a> {
    let prefix_len = common_prefix(old, new);
    let (old_rest, new_rest) = (&old[prefix_len..], &new[prefix_len..]);
    let suffix_len = common_suffix(old_rest, new_rest);
    Trimmed {
        prefix: &old[..prefix_len],
        old_middle: &old_rest[..old_rest.len() - suffix_len],
        new_middle: &new_rest[..new_rest.len() - suffix_len],
        suffix: &old_rest[old_rest.len() - suffix_len..],
    }
}
