//! UTF-16 surrogate helpers.

pub fn is_high_surrogate(unit: u16) -> bool {
    (0xd800..=0xdbff).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (0xdc00..=0xdfff).contains(&unit)
}

/// `true` when the last unit is the first half of a surrogate pair.
pub fn ends_with_pair_start(units: &[u16]) -> bool {
    units.last().is_some_and(|&u| is_high_surrogate(u))
}

/// `true` when the first unit is the second half of a surrogate pair.
pub fn starts_with_pair_end(units: &[u16]) -> bool {
    units.first().is_some_and(|&u| is_low_surrogate(u))
}

/// `true` when cutting `units` at `at` would separate a surrogate pair.
pub fn splits_pair(units: &[u16], at: usize) -> bool {
    at > 0 && at < units.len() && is_high_surrogate(units[at - 1]) && is_low_surrogate(units[at])
}

pub fn utf16_units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Converts code units produced from a valid `str` back to a `String`.
///
/// Tuple boundaries never split a pair, so the replacement character only
/// appears if the caller handed in unpaired surrogates through the
/// code-unit API.
pub fn from_utf16(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// First occurrence of `needle` in `haystack` at or after `from`.
pub fn find_units(haystack: &[u16], needle: &[u16], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}
