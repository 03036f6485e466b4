//! Invariant checks and the violations they report.
//!
//! Range and low-bit checks on each generated identifier are fatal and
//! surface as `Result` errors at the point of construction. The whole-table
//! checks (identifier uniqueness, table completeness) use Stillwater's
//! `Validation` type so that every offending entry is reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use permtable::enforcement::rules;
//! use permtable::indexer::PermutationIndexer;
//!
//! let indexer = PermutationIndexer::build().unwrap();
//! assert!(rules::unique_identifiers(indexer.forward()).is_success());
//! ```

pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use rules::CheckResult;
pub use violations::{ViolationError, ViolationStrategy};
