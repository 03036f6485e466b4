//! Violation errors and handling strategies.

use crate::core::{Permutation, Reorder};
use thiserror::Error;

/// Invariant violations detected while generating the table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViolationError {
    #[error("Assertion violated: generated {what} out of range [0, {bound}): {tuple} -> {value}")]
    RangeViolation {
        what: &'static str,
        tuple: Permutation,
        value: u32,
        bound: u32,
    },

    #[error("Assertion violated: low bits of generated id do not match 'a': {tuple} -> {id}")]
    LowBitMismatch { tuple: Permutation, id: u32 },

    #[error("Assertion violated: tuple is not a permutation of (0, 1, 2, 3): {tuple}")]
    NotAPermutation { tuple: Permutation },

    #[error("Assertion violated: id {id} is not unique: {first} and {second}")]
    DuplicateIdentifier {
        id: u8,
        first: Permutation,
        second: Permutation,
    },

    #[error("Assertion violated: table was not filled completely: row {id}, operation {op}")]
    IncompleteTable { id: u8, op: Reorder },

    #[error("Assertion violated: table cell written twice: row {id}, operation {op}")]
    CellOverwritten { id: u8, op: Reorder },
}

impl ViolationError {
    /// Fatal violations stop generation before any table is produced.
    ///
    /// Duplicate identifiers and incomplete tables are reported without
    /// halting, so every such defect surfaces in one run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RangeViolation { .. }
                | Self::LowBitMismatch { .. }
                | Self::NotAPermutation { .. }
                | Self::CellOverwritten { .. }
        )
    }
}

/// Strategy for handling non-fatal violations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViolationStrategy {
    /// Fail generation on any violation
    Abort,

    /// Report violations and keep the table
    #[default]
    IgnoreAndLog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification_follows_taxonomy() {
        let tuple = Permutation::new(0, 1, 2, 3);
        assert!(ViolationError::RangeViolation {
            what: "id",
            tuple,
            value: 24,
            bound: 24
        }
        .is_fatal());
        assert!(ViolationError::LowBitMismatch { tuple, id: 1 }.is_fatal());
        assert!(!ViolationError::DuplicateIdentifier {
            id: 0,
            first: tuple,
            second: Permutation::new(1, 0, 2, 3)
        }
        .is_fatal());
        assert!(!ViolationError::IncompleteTable {
            id: 0,
            op: Reorder::RotateAll
        }
        .is_fatal());
    }

    #[test]
    fn messages_name_check_and_tuple() {
        let err = ViolationError::RangeViolation {
            what: "id",
            tuple: Permutation::new(3, 2, 1, 0),
            value: 24,
            bound: 24,
        };
        assert_eq!(
            err.to_string(),
            "Assertion violated: generated id out of range [0, 24): (3, 2, 1, 0) -> 24"
        );

        let err = ViolationError::LowBitMismatch {
            tuple: Permutation::new(2, 0, 1, 3),
            id: 5,
        };
        assert!(err.to_string().contains("(2, 0, 1, 3) -> 5"));
    }
}
