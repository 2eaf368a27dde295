use fast_diff::{diff_main, diff_utf16, diff_with_cursor, CursorInfo, DiffError, EditScript, Operation, Selection};
use fast_diff::{DELETE, EQUAL, INSERT};

fn s(ops: &[(Operation, &str)]) -> EditScript {
    ops.iter().map(|(op, t)| (*op, t.to_string())).collect()
}

fn sel(old: (usize, usize), new: (usize, usize)) -> CursorInfo {
    CursorInfo::from((Selection::new(old.0, old.1), Selection::new(new.0, new.1)))
}

#[test]
fn insert_at_caret() {
    assert_eq!(diff_with_cursor("a", "aa", 0usize).unwrap(), s(&[(INSERT, "a"), (EQUAL, "a")]));
    assert_eq!(diff_with_cursor("a", "aa", 1usize).unwrap(), s(&[(EQUAL, "a"), (INSERT, "a")]));
    assert_eq!(
        diff_with_cursor("aa", "aaa", 1usize).unwrap(),
        s(&[(EQUAL, "a"), (INSERT, "a"), (EQUAL, "a")])
    );
    assert_eq!(
        diff_with_cursor("aaaa", "aaaaa", 2usize).unwrap(),
        s(&[(EQUAL, "aa"), (INSERT, "a"), (EQUAL, "aa")])
    );
    assert_eq!(diff_with_cursor("aaaa", "aaaaa", 4usize).unwrap(), s(&[(EQUAL, "aaaa"), (INSERT, "a")]));
}

#[test]
fn replace_whole_selection() {
    assert_eq!(
        diff_with_cursor("hello", "h", sel((0, 5), (1, 0))).unwrap(),
        s(&[(DELETE, "hello"), (INSERT, "h")])
    );
    assert_eq!(
        diff_with_cursor("hello", "h", sel((0, 5), (0, 1))).unwrap(),
        s(&[(DELETE, "hello"), (INSERT, "h")])
    );
    assert_eq!(
        diff_with_cursor("hello world", "hello", sel((5, 6), (5, 0))).unwrap(),
        s(&[(EQUAL, "hello"), (DELETE, " world")])
    );
}

#[test]
fn selected_repeat_is_the_one_deleted() {
    assert_eq!(
        diff_with_cursor("abcabc", "abc", sel((3, 3), (3, 0))).unwrap(),
        s(&[(EQUAL, "abc"), (DELETE, "abc")])
    );
    assert_eq!(
        diff_with_cursor("abcabc", "abc", sel((0, 3), (0, 0))).unwrap(),
        s(&[(DELETE, "abc"), (EQUAL, "abc")])
    );
}

#[test]
fn backward_and_forward_delete() {
    assert_eq!(
        diff_with_cursor("xxx", "xx", sel((2, 0), (1, 0))).unwrap(),
        s(&[(EQUAL, "x"), (DELETE, "x"), (EQUAL, "x")])
    );
    assert_eq!(
        diff_with_cursor("xxx", "xx", sel((1, 0), (1, 0))).unwrap(),
        s(&[(EQUAL, "x"), (DELETE, "x"), (EQUAL, "x")])
    );
    // Without a cursor the trailing x goes.
    assert_eq!(diff_main("xxx", "xx", None).unwrap(), s(&[(EQUAL, "xx"), (DELETE, "x")]));
}

#[test]
fn inconsistent_caret_falls_back_to_canonical() {
    assert_eq!(
        diff_with_cursor("abc", "abXc", 3usize).unwrap(),
        s(&[(EQUAL, "ab"), (INSERT, "X"), (EQUAL, "c")])
    );
    assert_eq!(
        diff_with_cursor("abc", "axbc", 2usize).unwrap(),
        s(&[(EQUAL, "a"), (INSERT, "x"), (EQUAL, "bc")])
    );
}

#[test]
fn caret_between_surrogates_is_not_honoured() {
    assert_eq!(
        diff_with_cursor("🤔🤔", "🤔🤔🤔", 2usize).unwrap(),
        s(&[(EQUAL, "🤔"), (INSERT, "🤔"), (EQUAL, "🤔")])
    );
    assert_eq!(diff_with_cursor("🤔🤔", "🤔🤔🤔", 1usize).unwrap(), s(&[(EQUAL, "🤔🤔"), (INSERT, "🤔")]));
}

#[test]
fn equal_texts_ignore_the_cursor() {
    assert_eq!(diff_with_cursor("abc", "abc", 1usize).unwrap(), s(&[(EQUAL, "abc")]));
    assert_eq!(diff_with_cursor("", "", 0usize).unwrap(), s(&[]));
}

#[test]
fn errors_fail_fast() {
    assert_eq!(
        diff_with_cursor("abc", "abcd", 4usize),
        Err(DiffError::InvalidSelection { index: 4, length: 0, text_len: 3 })
    );
    assert_eq!(
        diff_with_cursor("abc", "ab", sel((1, 5), (1, 0))),
        Err(DiffError::InvalidSelection { index: 1, length: 5, text_len: 3 })
    );
    assert_eq!(
        diff_with_cursor("abc", "ab", sel((1, 1), (3, 0))),
        Err(DiffError::InvalidSelection { index: 3, length: 0, text_len: 2 })
    );
    let missing_new = CursorInfo::Selections { old: Selection::new(0, 2), new: None };
    assert_eq!(diff_with_cursor("abc", "c", missing_new), Err(DiffError::InconsistentCursorInput));
    // Validation runs even when nothing changed.
    assert!(diff_with_cursor("abc", "abc", 9usize).is_err());
}

#[test]
fn selection_json_round_trip() {
    let raw = r#"{"oldRange":{"index":0,"length":5},"newRange":{"index":1,"length":0}}"#;
    let cursor: CursorInfo = serde_json::from_str(raw).unwrap();
    assert_eq!(diff_main("hello", "h", Some(cursor)).unwrap(), s(&[(DELETE, "hello"), (INSERT, "h")]));
    assert_eq!(serde_json::to_string(&cursor).unwrap(), raw);
}

#[test]
fn code_unit_entry_point_passes_unpaired_surrogates_through() {
    let old: Vec<u16> = vec![b'a' as u16, 0xd800, b'b' as u16];
    let new: Vec<u16> = vec![b'a' as u16, 0xd800, b'c' as u16];
    let script = diff_utf16(&old, &new, None).unwrap();
    let rebuilt_old: Vec<u16> = script
        .iter()
        .filter(|(op, _)| *op != INSERT)
        .flat_map(|(_, t)| t.iter().copied())
        .collect();
    let rebuilt_new: Vec<u16> = script
        .iter()
        .filter(|(op, _)| *op != DELETE)
        .flat_map(|(_, t)| t.iter().copied())
        .collect();
    assert_eq!(rebuilt_old, old);
    assert_eq!(rebuilt_new, new);
}

#[test]
fn repeated_lone_low_surrogate_is_a_plain_insert() {
    let script = diff_utf16(&[0xdc68, 0x61], &[0xdc68, 0xdc68, 0x61], None).unwrap();
    assert_eq!(script, vec![(INSERT, vec![0xdc68]), (EQUAL, vec![0xdc68, 0x61])]);
}

#[test]
fn out_of_range_cursor_from_json_is_rejected() {
    assert_eq!(
        diff_with_cursor("a", "ab", 5usize),
        Err(DiffError::InvalidSelection { index: 5, length: 0, text_len: 1 })
    );
    let raw = format!(r#"{{"oldRange":{{"index":{},"length":2}},"newRange":{{"index":0,"length":0}}}}"#, usize::MAX);
    let cursor: CursorInfo = serde_json::from_str(&raw).unwrap();
    assert!(matches!(
        diff_main("abc", "ab", Some(cursor)),
        Err(DiffError::InvalidSelection { length: 2, .. })
    ));
}
