//! Permtable: transition table generator for the 24 orderings of four children
//!
//! Permtable assigns each permutation of `{0, 1, 2, 3}` a dense identifier
//! in `[0, 24)` and records, for four fixed reordering operations, which
//! identifier each permutation moves to. The resulting 24×4 table drives
//! orientation state machines over four-way branching structures such as
//! quad-tree child orderings or space-filling curve generators.
//!
//! # Core Concepts
//!
//! - **Permutation**: an ordered 4-tuple packed into an 8-bit lookup key
//! - **PermutationId**: mixed-radix identifier whose low two bits equal the
//!   permutation's first element
//! - **Reorder**: identity, swap-first-two, rotate-first-three, rotate-all
//! - **TransitionTable**: the checked `(id, op) -> id` grid
//!
//! # Example
//!
//! ```rust
//! use permtable::core::Reorder;
//! use permtable::generator::TableGenerator;
//!
//! let generation = TableGenerator::builder().build().generate().unwrap();
//! let table = &generation.table;
//!
//! let start = permtable::indexer::PermutationId::MIN;
//! let swapped = table.get(start, Reorder::SwapFirstTwo).unwrap();
//! assert_eq!(swapped.first(), 1);
//!
//! let text = table.to_string();
//! assert!(text.starts_with("[\n    [0x00, 0x01, 0x02, 0x03],"));
//! ```

pub mod core;
pub mod enforcement;
pub mod generator;
pub mod indexer;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Permutation, Reorder};
pub use enforcement::{ViolationError, ViolationStrategy};
pub use generator::{GenerateError, Generation, TableGenerator};
pub use indexer::{PermutationId, PermutationIndexer};
pub use table::{TransitionTable, TransitionTableBuilder};
