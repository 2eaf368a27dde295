//! Randomized checking for `fast-diff`.
//!
//! [`fuzzer::Fuzzer`] generates reproducible inputs and [`check`] verifies the
//! structural properties of an edit script. [`harness::run`] drives both over
//! thousands of string pairs.

pub mod check;
pub mod fuzzer;
pub mod harness;

pub use check::{check_script, check_units, InvariantViolation};
pub use fuzzer::{EditKind, Fuzzer};
pub use harness::{run, FailureCause, FuzzConfig, FuzzFailure, FuzzReport};
