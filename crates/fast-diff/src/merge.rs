//! Tuple merging and surrogate-pair boundary repair.
//!
//! One pass collects every run of deletions and insertions between two
//! equalities into a single DELETE followed by a single INSERT, factors text
//! shared by both ends of the run into the surrounding equalities and joins
//! adjacent equalities. A second pass slides lone edits sideways across an
//! equality they repeat (`A<ins>BA</ins>C` becomes `<ins>AB</ins>AC`), rerunning
//! the whole merge whenever something moved.

use crate::affix::{common_prefix, common_suffix};
use crate::op::{Operation, Utf16Script};
use crate::unicode::{ends_with_pair_start, starts_with_pair_end};

fn prepend(head: &[u16], tail: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(head.len() + tail.len());
    out.extend_from_slice(head);
    out.extend_from_slice(tail);
    out
}

/// The run's text, or `fallback` when the run is empty.
fn run_or<'a>(run: &'a [u16], fallback: &'a [u16]) -> &'a [u16] {
    if run.is_empty() {
        fallback
    } else {
        run
    }
}

/// Normalizes `diff` in place.
///
/// With `fix_unicode`, equalities bordering an edit run give up surrogate
/// halves to the run so that no tuple boundary splits a pair. A surrogate
/// without a partner on the other side of the boundary stays where it is.
pub fn cleanup_merge(diff: &mut Utf16Script, fix_unicode: bool) {
    let mut seen: Vec<Utf16Script> = Vec::new();
    loop {
        merge_runs(diff, fix_unicode);
        if !slide_single_edits(diff) {
            return;
        }
        if seen.contains(diff) {
            // Sliding went round in a cycle; settle on a merged state.
            tracing::trace!(rounds = seen.len(), "merge cycle detected");
            merge_runs(diff, fix_unicode);
            return;
        }
        seen.push(diff.clone());
    }
}

fn merge_runs(diff: &mut Utf16Script, fix_unicode: bool) {
    diff.push((Operation::Equal, Vec::new()));
    let mut pointer = 0usize;
    let mut del_cnt = 0usize;
    let mut ins_cnt = 0usize;
    let mut del_txt: Vec<u16> = Vec::new();
    let mut ins_txt: Vec<u16> = Vec::new();

    while pointer < diff.len() {
        if pointer < diff.len() - 1 && diff[pointer].1.is_empty() {
            diff.remove(pointer);
            continue;
        }

        match diff[pointer].0 {
            Operation::Insert => {
                ins_cnt += 1;
                ins_txt.extend_from_slice(&diff[pointer].1);
                pointer += 1;
            }
            Operation::Delete => {
                del_cnt += 1;
                del_txt.extend_from_slice(&diff[pointer].1);
                pointer += 1;
            }
            Operation::Equal => {
                let mut prev_eq = pointer as isize - ins_cnt as isize - del_cnt as isize - 1;

                if fix_unicode {
                    let splits_before = prev_eq >= 0 && ends_with_pair_start(&diff[prev_eq as usize].1) && {
                        let after = &diff[pointer].1;
                        starts_with_pair_end(run_or(&del_txt, after)) || starts_with_pair_end(run_or(&ins_txt, after))
                    };
                    if splits_before {
                        let idx = prev_eq as usize;
                        let stray = diff[idx].1.pop();
                        if let Some(unit) = stray {
                            del_txt.insert(0, unit);
                            ins_txt.insert(0, unit);
                        }
                        if diff[idx].1.is_empty() {
                            // The equality vanished: the edits in front of it
                            // become part of the current run.
                            diff.remove(idx);
                            pointer -= 1;
                            let mut k = prev_eq - 1;
                            if k >= 0 && diff[k as usize].0 == Operation::Insert {
                                ins_cnt += 1;
                                ins_txt = prepend(&diff[k as usize].1, &ins_txt);
                                k -= 1;
                            }
                            if k >= 0 && diff[k as usize].0 == Operation::Delete {
                                del_cnt += 1;
                                del_txt = prepend(&diff[k as usize].1, &del_txt);
                                k -= 1;
                            }
                            prev_eq = k;
                        }
                    }
                    let splits_after = starts_with_pair_end(&diff[pointer].1) && {
                        let before: &[u16] = if prev_eq >= 0 { diff[prev_eq as usize].1.as_slice() } else { &[] };
                        ends_with_pair_start(run_or(&del_txt, before)) || ends_with_pair_start(run_or(&ins_txt, before))
                    };
                    if splits_after {
                        let unit = diff[pointer].1.remove(0);
                        del_txt.push(unit);
                        ins_txt.push(unit);
                    }
                }

                if pointer < diff.len() - 1 && diff[pointer].1.is_empty() {
                    // An emptied equality in the middle: keep collecting
                    // until the next one.
                    diff.remove(pointer);
                    continue;
                }

                if !del_txt.is_empty() || !ins_txt.is_empty() {
                    if !del_txt.is_empty() && !ins_txt.is_empty() {
                        let common = common_prefix(&ins_txt, &del_txt);
                        if common != 0 {
                            if prev_eq >= 0 {
                                diff[prev_eq as usize].1.extend_from_slice(&ins_txt[..common]);
                            } else {
                                diff.insert(0, (Operation::Equal, ins_txt[..common].to_vec()));
                                pointer += 1;
                            }
                            ins_txt.drain(..common);
                            del_txt.drain(..common);
                        }

                        let common = common_suffix(&ins_txt, &del_txt);
                        if common != 0 {
                            let ins_keep = ins_txt.len() - common;
                            let del_keep = del_txt.len() - common;
                            diff[pointer].1 = prepend(&ins_txt[ins_keep..], &diff[pointer].1);
                            ins_txt.truncate(ins_keep);
                            del_txt.truncate(del_keep);
                        }
                    }

                    let n = ins_cnt + del_cnt;
                    let start = pointer - n;
                    match (del_txt.is_empty(), ins_txt.is_empty()) {
                        (true, true) => {
                            diff.drain(start..pointer);
                            pointer = start;
                        }
                        (true, false) => {
                            diff.splice(start..pointer, [(Operation::Insert, std::mem::take(&mut ins_txt))]);
                            pointer = start + 1;
                        }
                        (false, true) => {
                            diff.splice(start..pointer, [(Operation::Delete, std::mem::take(&mut del_txt))]);
                            pointer = start + 1;
                        }
                        (false, false) => {
                            diff.splice(
                                start..pointer,
                                [
                                    (Operation::Delete, std::mem::take(&mut del_txt)),
                                    (Operation::Insert, std::mem::take(&mut ins_txt)),
                                ],
                            );
                            pointer = start + 2;
                        }
                    }
                }

                if pointer != 0 && diff[pointer - 1].0 == Operation::Equal {
                    let cur = diff.remove(pointer).1;
                    diff[pointer - 1].1.extend_from_slice(&cur);
                } else {
                    pointer += 1;
                }

                ins_cnt = 0;
                del_cnt = 0;
                del_txt.clear();
                ins_txt.clear();
            }
        }
    }

    if diff.last().is_some_and(|(_, s)| s.is_empty()) {
        diff.pop();
    }
}

/// Slides each edit sitting between two equalities across one of them when
/// the edit repeats it. Returns whether anything moved.
fn slide_single_edits(diff: &mut Utf16Script) -> bool {
    let mut changes = false;
    let mut ptr = 1usize;
    while ptr + 1 < diff.len() {
        if diff[ptr - 1].0 == Operation::Equal && diff[ptr + 1].0 == Operation::Equal {
            let prev = diff[ptr - 1].1.clone();
            let next = diff[ptr + 1].1.clone();
            if diff[ptr].1.ends_with(&prev) {
                let cur = &diff[ptr].1;
                let shifted = prepend(&prev, &cur[..cur.len() - prev.len()]);
                diff[ptr].1 = shifted;
                diff[ptr + 1].1 = prepend(&prev, &next);
                diff.remove(ptr - 1);
                changes = true;
            } else if diff[ptr].1.starts_with(&next) {
                diff[ptr - 1].1.extend_from_slice(&next);
                let cur = &diff[ptr].1;
                let shifted = prepend(&cur[next.len()..], &next);
                diff[ptr].1 = shifted;
                diff.remove(ptr + 1);
                changes = true;
            }
        }
        ptr += 1;
    }
    changes
}
