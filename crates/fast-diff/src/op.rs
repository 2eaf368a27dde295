//! Edit operations and the tuple types built from them.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

// ── Operation ─────────────────────────────────────────────────────────────

/// Kind of a diff tuple.
///
/// The discriminants are the wire encoding (`-1`, `0`, `1`) and give the
/// total order `Delete < Equal < Insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Delete = -1,
    Equal = 0,
    Insert = 1,
}

pub const DELETE: Operation = Operation::Delete;
pub const EQUAL: Operation = Operation::Equal;
pub const INSERT: Operation = Operation::Insert;

impl Operation {
    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Operation::Delete),
            0 => Some(Operation::Equal),
            1 => Some(Operation::Insert),
            _ => None,
        }
    }

    /// Swap deletions and insertions; equalities stay put.
    pub fn inverse(self) -> Self {
        match self {
            Operation::Delete => Operation::Insert,
            Operation::Equal => Operation::Equal,
            Operation::Insert => Operation::Delete,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Delete => "DELETE",
            Operation::Equal => "EQUAL",
            Operation::Insert => "INSERT",
        })
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

struct OperationVisitor;

impl<'de> Visitor<'de> for OperationVisitor {
    type Value = Operation;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("one of -1, 0, 1")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Operation, E> {
        Operation::from_code(v).ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Operation, E> {
        i64::try_from(v)
            .ok()
            .and_then(Operation::from_code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_i64(OperationVisitor)
    }
}

// ── Tuples ────────────────────────────────────────────────────────────────

pub type DiffTuple = (Operation, String);
pub type EditScript = Vec<DiffTuple>;

/// A tuple whose text is kept as UTF-16 code units.
pub type Utf16Tuple = (Operation, Vec<u16>);
pub type Utf16Script = Vec<Utf16Tuple>;
