//! Generation errors.

use crate::enforcement::ViolationError;
use thiserror::Error;

/// Errors that stop the generator from producing a table.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Table generation stopped: {0}")]
    Fatal(#[from] ViolationError),

    #[error("Table generation rejected: {} invariant violation(s)", .0.len())]
    Violations(Vec<ViolationError>),
}

impl GenerateError {
    /// Every violation carried by this error, in detection order.
    pub fn violations(&self) -> Vec<&ViolationError> {
        match self {
            Self::Fatal(violation) => vec![violation],
            Self::Violations(violations) => violations.iter().collect(),
        }
    }
}
