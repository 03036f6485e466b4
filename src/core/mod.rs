//! Core value types for the permutation domain.
//!
//! This module contains the plain data the generator works over:
//! - `Permutation` tuples and their `PackedKey` lookup index
//! - The four fixed `Reorder` operations
//! - The explicit rank-among-remaining helper used by the encoding
//!
//! Everything here is pure; validation and diagnostics live in
//! `indexer`, `table` and `enforcement`.

mod permutation;
mod reorder;

pub use permutation::{
    rank_among_remaining, remaining, PackedKey, Permutation, PACKED_KEY_SPACE, PERMUTATIONS,
    SYMBOLS,
};
pub use reorder::Reorder;
