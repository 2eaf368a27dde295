use std::sync::{Mutex, MutexGuard, PoisonError};

use fast_diff::{CursorInfo, Selection};
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Fragments mixed by [`Fuzzer::random_emoji_string`]: ASCII, BMP, astral
/// code points, skin-tone modifiers and zero-width joiners.
pub const EMOJI_FRAGMENTS: &[&str] = &[
    "a", "b", "c", " ", "é", "中", "🤔", "🤫", "👨", "👩", "🏽", "\u{200d}", "👨\u{200d}👩\u{200d}👧",
];

/// What a simulated keystroke did to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Backspace,
    ForwardDelete,
    ReplaceSelection,
}

const EDIT_KINDS: [EditKind; 4] = [
    EditKind::Insert,
    EditKind::Backspace,
    EditKind::ForwardDelete,
    EditKind::ReplaceSelection,
];

/// A seeded generator of diff inputs.
///
/// Uses xoshiro256** so a run can be replayed from its seed.
///
/// ```
/// use fast_diff_fuzz::fuzzer::Fuzzer;
///
/// let a = Fuzzer::new(Some(42));
/// let b = Fuzzer::new(Some(42));
/// assert_eq!(a.random_string(20, "GATTACA"), b.random_string(20, "GATTACA"));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: u64,
    rng: Mutex<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Creates a fuzzer; without a seed one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Mutex::new(Xoshiro256StarStar::seed_from_u64(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, Xoshiro256StarStar> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&self, min: usize, max: usize) -> usize {
        self.rng().gen_range(min..=max)
    }

    /// Picks one element; `elements` must not be empty.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng().gen_range(0..elements.len());
        &elements[idx]
    }

    /// `len` characters drawn from `alphabet`.
    pub fn random_string(&self, len: usize, alphabet: &str) -> String {
        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let mut rng = self.rng();
        (0..len).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
    }

    /// `len` fragments drawn from [`EMOJI_FRAGMENTS`].
    pub fn random_emoji_string(&self, len: usize) -> String {
        (0..len).map(|_| *self.pick(EMOJI_FRAGMENTS)).collect()
    }

    /// Applies one random keystroke-sized edit to `text`.
    ///
    /// Returns the edited text and the cursor describing the edit. Edit
    /// points always fall on character boundaries.
    pub fn caret_edit(&self, text: &str, alphabet: &str) -> (String, CursorInfo) {
        // Byte offset of every character boundary, including the end.
        let bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).chain([text.len()]).collect();
        let kind = if bounds.len() < 2 {
            EditKind::Insert
        } else {
            *self.pick(&EDIT_KINDS)
        };
        let units = |s: &str| s.encode_utf16().count();
        match kind {
            EditKind::Insert => {
                let at = *self.pick(&bounds);
                let typed = self.random_string(self.random_int(1, 3), alphabet);
                let new = format!("{}{typed}{}", &text[..at], &text[at..]);
                (new, CursorInfo::Index(units(&text[..at])))
            }
            EditKind::Backspace => {
                let i = self.random_int(1, bounds.len() - 1);
                let (start, end) = (bounds[i - 1], bounds[i]);
                let new = format!("{}{}", &text[..start], &text[end..]);
                let cursor = (Selection::caret(units(&text[..end])), Selection::caret(units(&text[..start])));
                (new, cursor.into())
            }
            EditKind::ForwardDelete => {
                let i = self.random_int(0, bounds.len() - 2);
                let (start, end) = (bounds[i], bounds[i + 1]);
                let new = format!("{}{}", &text[..start], &text[end..]);
                let caret = units(&text[..start]);
                (new, (Selection::caret(caret), Selection::caret(caret)).into())
            }
            EditKind::ReplaceSelection => {
                let i = self.random_int(0, bounds.len() - 2);
                let j = self.random_int(i + 1, bounds.len() - 1);
                let (start, end) = (bounds[i], bounds[j]);
                let typed = self.random_string(self.random_int(0, 3), alphabet);
                let new = format!("{}{typed}{}", &text[..start], &text[end..]);
                let index = units(&text[..start]);
                let old = Selection::new(index, units(&text[start..end]));
                (new, (old, Selection::caret(index + units(&typed))).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_int_stays_in_range() {
        let fuzzer = Fuzzer::new(None);
        for _ in 0..100 {
            let n = fuzzer.random_int(5, 15);
            assert!((5..=15).contains(&n));
        }
    }

    #[test]
    fn pick_returns_a_member() {
        let fuzzer = Fuzzer::new(None);
        let choices = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(choices.contains(fuzzer.pick(&choices)));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = Fuzzer::new(Some(7));
        let b = Fuzzer::new(Some(7));
        for _ in 0..10 {
            assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
        }
        assert_eq!(a.random_emoji_string(30), b.random_emoji_string(30));
    }

    #[test]
    fn random_string_uses_the_alphabet() {
        let fuzzer = Fuzzer::new(Some(1));
        let s = fuzzer.random_string(100, "GATTACA");
        assert_eq!(s.chars().count(), 100);
        assert!(s.chars().all(|c| "GATC".contains(c)));
        assert_eq!(fuzzer.random_string(10, ""), "");
    }

    #[test]
    fn caret_edit_cursor_fits_both_texts() {
        let fuzzer = Fuzzer::new(Some(3));
        for _ in 0..500 {
            let old = fuzzer.random_emoji_string(fuzzer.random_int(0, 8));
            let (new, cursor) = fuzzer.caret_edit(&old, "xy🙂");
            let old_len = old.encode_utf16().count();
            let new_len = new.encode_utf16().count();
            assert_eq!(cursor.validate(old_len, new_len), Ok(()));
        }
    }

    #[test]
    fn caret_edit_on_empty_text_inserts() {
        let fuzzer = Fuzzer::new(Some(9));
        let (new, cursor) = fuzzer.caret_edit("", "GATTACA");
        assert!(!new.is_empty());
        assert_eq!(cursor, CursorInfo::Index(0));
    }
}
