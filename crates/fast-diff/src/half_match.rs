//! Half-match speedup.
//!
//! When the texts share a substring at least half as long as the longer
//! text, the problem splits around it into two smaller diffs. The result can
//! be non-minimal, which is exactly what the reference algorithm produces.

use crate::affix::{common_prefix, common_suffix};
use crate::unicode::find_units;

/// Both texts cut around a long shared substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfMatch<'a> {
    pub old_a: &'a [u16],
    pub old_b: &'a [u16],
    pub new_a: &'a [u16],
    pub new_b: &'a [u16],
    pub common: &'a [u16],
}

/// `long` and `short` cut around their best common substring.
struct Candidate<'a> {
    long_a: &'a [u16],
    long_b: &'a [u16],
    short_a: &'a [u16],
    short_b: &'a [u16],
    common: &'a [u16],
}

/// Looks for a common substring of at least half the longer text that
/// contains the quarter-length seed of `long` starting at `i`.
fn half_match_at<'a>(long: &'a [u16], short: &'a [u16], i: usize) -> Option<Candidate<'a>> {
    let seed_end = (i + long.len() / 4).min(long.len());
    let seed = &long[i..seed_end];
    let mut best: Option<Candidate<'a>> = None;
    let mut best_len = 0usize;
    let mut from = 0usize;
    while let Some(j) = find_units(short, seed, from) {
        let prefix_len = common_prefix(&long[i..], &short[j..]);
        let suffix_len = common_suffix(&long[..i], &short[..j]);
        if best_len < suffix_len + prefix_len {
            best_len = suffix_len + prefix_len;
            best = Some(Candidate {
                long_a: &long[..i - suffix_len],
                long_b: &long[i + prefix_len..],
                short_a: &short[..j - suffix_len],
                short_b: &short[j + prefix_len..],
                common: &short[j - suffix_len..j + prefix_len],
            });
        }
        from = j + 1;
    }
    best.filter(|_| best_len * 2 >= long.len())
}

/// Splits `old`/`new` around a shared substring at least half the length of
/// the longer one, or returns `None` when no such substring is seeded by the
/// second or third quarter of the longer text.
pub fn half_match<'a>(old: &'a [u16], new: &'a [u16]) -> Option<HalfMatch<'a>> {
    let old_longer = old.len() > new.len();
    let (long, short) = if old_longer { (old, new) } else { (new, old) };
    if long.len() < 4 || short.len() * 2 < long.len() {
        return None;
    }

    let hm1 = half_match_at(long, short, long.len().div_ceil(4));
    let hm2 = half_match_at(long, short, long.len().div_ceil(2));
    let hm = match (hm1, hm2) {
        (None, None) => return None,
        (Some(hm1), None) => hm1,
        (None, Some(hm2)) => hm2,
        (Some(hm1), Some(hm2)) => {
            if hm1.common.len() > hm2.common.len() {
                hm1
            } else {
                hm2
            }
        }
    };

    Some(if old_longer {
        HalfMatch {
            old_a: hm.long_a,
            old_b: hm.long_b,
            new_a: hm.short_a,
            new_b: hm.short_b,
            common: hm.common,
        }
    } else {
        HalfMatch {
            old_a: hm.short_a,
            old_b: hm.short_b,
            new_a: hm.long_a,
            new_b: hm.long_b,
            common: hm.common,
        }
    })
}
