//! One-shot pipeline from permutation encoding to a checked table.
//!
//! The generator builds the indexer, checks identifier uniqueness, builds
//! the transition table, checks completeness, and then applies the
//! configured [`ViolationStrategy`] to whatever the checks reported.
//!
//! # Example
//!
//! ```rust
//! use permtable::enforcement::ViolationStrategy;
//! use permtable::generator::TableGenerator;
//!
//! let generation = TableGenerator::builder()
//!     .on_violation(ViolationStrategy::Abort)
//!     .build()
//!     .generate()
//!     .unwrap();
//!
//! assert!(generation.is_clean());
//! assert!(generation.table.is_complete());
//! ```

pub mod error;

pub use error::GenerateError;

use crate::enforcement::{CheckResult, ViolationError, ViolationStrategy};
use crate::indexer::PermutationIndexer;
use crate::table::{TransitionTable, TransitionTableBuilder};
use stillwater::validation::Validation;
use tracing::{error, info, warn};

/// A generated table together with any tolerated violations.
#[derive(Clone, Debug)]
pub struct Generation {
    pub table: TransitionTable,
    pub violations: Vec<ViolationError>,
}

impl Generation {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs the generation pipeline under a violation policy.
#[derive(Clone, Debug, Default)]
pub struct TableGenerator {
    on_violation: ViolationStrategy,
}

impl TableGenerator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }

    /// Generate and check the table.
    ///
    /// Fatal violations always fail. Non-fatal ones fail under
    /// [`ViolationStrategy::Abort`] and are returned with the table under
    /// [`ViolationStrategy::IgnoreAndLog`].
    pub fn generate(&self) -> Result<Generation, GenerateError> {
        let indexer = PermutationIndexer::build().map_err(fatal)?;
        let mut violations = failures(indexer.validate());

        let table = TransitionTableBuilder::new(&indexer)
            .build()
            .map_err(fatal)?;
        violations.extend(failures(table.validate()));

        self.resolve(table, violations)
    }

    fn resolve(
        &self,
        table: TransitionTable,
        violations: Vec<ViolationError>,
    ) -> Result<Generation, GenerateError> {
        if violations.is_empty() {
            info!("transition table generated");
            return Ok(Generation { table, violations });
        }

        match self.on_violation {
            ViolationStrategy::Abort => {
                for violation in &violations {
                    error!(%violation, "invariant violated");
                }
                Err(GenerateError::Violations(violations))
            }
            ViolationStrategy::IgnoreAndLog => {
                for violation in &violations {
                    warn!(%violation, "invariant violated, continuing");
                }
                Ok(Generation { table, violations })
            }
        }
    }
}

fn fatal(violation: ViolationError) -> GenerateError {
    error!(%violation, "fatal violation, table not generated");
    GenerateError::Fatal(violation)
}

fn failures(check: CheckResult) -> Vec<ViolationError> {
    match check {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

/// Builder for configuring a [`TableGenerator`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorBuilder {
    on_violation: ViolationStrategy,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    pub fn build(self) -> TableGenerator {
        TableGenerator {
            on_violation: self.on_violation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Permutation, Reorder};

    fn sample_violations() -> Vec<ViolationError> {
        vec![
            ViolationError::DuplicateIdentifier {
                id: 2,
                first: Permutation::new(0, 1, 2, 3),
                second: Permutation::new(2, 0, 1, 3),
            },
            ViolationError::IncompleteTable {
                id: 5,
                op: Reorder::RotateFirstThree,
            },
        ]
    }

    #[test]
    fn default_strategy_tolerates_non_fatal_violations() {
        let generator = TableGenerator::builder().build();
        assert_eq!(
            generator.violation_strategy(),
            ViolationStrategy::IgnoreAndLog
        );

        let generation = generator
            .resolve(TransitionTable::empty(), sample_violations())
            .unwrap();
        assert!(!generation.is_clean());
        assert_eq!(generation.violations.len(), 2);
    }

    #[test]
    fn abort_strategy_rejects_any_violation() {
        let generator = TableGenerator::builder()
            .on_violation(ViolationStrategy::Abort)
            .build();

        let err = generator
            .resolve(TransitionTable::empty(), sample_violations())
            .unwrap_err();
        assert!(matches!(err, GenerateError::Violations(ref v) if v.len() == 2));
        assert_eq!(err.violations().len(), 2);
        assert_eq!(
            err.to_string(),
            "Table generation rejected: 2 invariant violation(s)"
        );
    }

    #[test]
    fn generation_is_clean_under_both_strategies() {
        for strategy in [ViolationStrategy::Abort, ViolationStrategy::IgnoreAndLog] {
            let generation = TableGenerator::builder()
                .on_violation(strategy)
                .build()
                .generate()
                .unwrap();
            assert!(generation.is_clean());
            assert!(generation.table.is_complete());
        }
    }

    #[test]
    fn fatal_error_wraps_violation() {
        let violation = ViolationError::LowBitMismatch {
            tuple: Permutation::new(1, 0, 2, 3),
            id: 4,
        };
        let err = GenerateError::from(violation.clone());
        assert_eq!(err.violations(), vec![&violation]);
        assert!(err.to_string().starts_with("Table generation stopped: "));
    }
}
