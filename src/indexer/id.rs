//! Dense permutation identifiers.

use crate::core::PERMUTATIONS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense identifier in `[0, 24)` naming one permutation.
///
/// The low two bits always equal the permutation's first element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PermutationId(u8);

impl PermutationId {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(PERMUTATIONS as u8 - 1);

    /// Returns `None` outside `[0, 24)`.
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < PERMUTATIONS {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_index(self) -> usize {
        self.0 as usize
    }

    /// The first element of the identified permutation, read from the
    /// low two bits.
    pub const fn first(self) -> u8 {
        self.0 & 3
    }

    /// All 24 identifiers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PERMUTATIONS as u8).map(Self)
    }
}

impl TryFrom<u8> for PermutationId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("permutation id {raw} out of range [0, {PERMUTATIONS})"))
    }
}

impl From<PermutationId> for u8 {
    fn from(id: PermutationId) -> Self {
        id.0
    }
}

impl fmt::Display for PermutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
