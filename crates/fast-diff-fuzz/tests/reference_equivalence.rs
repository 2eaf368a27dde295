use diff_match_patch_rs::{Compat, DiffMatchPatch, Ops};
use fast_diff::patch::normalize;
use fast_diff::{diff, EditScript, Operation};
use fast_diff_fuzz::Fuzzer;

/// diff-match-patch with half-match enabled and line mode off.
fn reference() -> DiffMatchPatch {
    let mut dmp = DiffMatchPatch::new();
    dmp.set_timeout(Some(3_600_000));
    dmp.set_checklines(false);
    dmp
}

fn reference_diff(dmp: &DiffMatchPatch, old: &str, new: &str) -> EditScript {
    let diffs = dmp.diff_main::<Compat>(old, new).unwrap();
    let script: EditScript = diffs
        .iter()
        .map(|d| {
            let op = match d.op() {
                Ops::Delete => Operation::Delete,
                Ops::Equal => Operation::Equal,
                Ops::Insert => Operation::Insert,
            };
            (op, d.data().iter().collect::<String>())
        })
        .collect();
    // The reference occasionally leaves a shared edge unfolded.
    normalize(&script)
}

#[test]
fn random_gattaca_pairs_match_the_reference() {
    let dmp = reference();
    for seed in [11, 2718] {
        let fuzzer = Fuzzer::new(Some(seed));
        let strings: Vec<String> = (0..=1000).map(|_| fuzzer.random_string(100, "GATTACA")).collect();
        for pair in strings.windows(2) {
            let (old, new) = (&pair[0], &pair[1]);
            assert_eq!(diff(old, new), reference_diff(&dmp, old, new), "seed {seed}: {old:?} -> {new:?}");
        }
    }
}

#[test]
fn keystroke_edits_match_the_reference() {
    let dmp = reference();
    let fuzzer = Fuzzer::new(Some(31337));
    for _ in 0..2000 {
        let old = fuzzer.random_string(fuzzer.random_int(0, 60), "GATTACA");
        let (new, _) = fuzzer.caret_edit(&old, "GATTACA");
        assert_eq!(diff(&old, &new), reference_diff(&dmp, &old, &new), "{old:?} -> {new:?}");
    }
}

