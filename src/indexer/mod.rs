//! Dense encoding of the 24 permutations.
//!
//! Each permutation `(a, b, c, d)` receives the mixed-radix identifier
//!
//! ```text
//! id = 12 * rank_c + 4 * rank_b + a
//! ```
//!
//! where `rank_b` is the rank of `b` among the values left after removing
//! `a`, and `rank_c` the rank of `c` among the values left after removing
//! `a` and `b`. Digits range over 4, 3 and 2 values, so the identifiers
//! cover `[0, 24)` without gaps and the low two bits always equal `a`.

mod forward;
mod id;

pub use forward::ForwardTable;
pub use id::PermutationId;

use crate::core::{rank_among_remaining, Permutation, PERMUTATIONS};
use crate::enforcement::{rules, CheckResult, ViolationError};
use tracing::debug;

/// Place weight of `rank_b`.
const RANK_B_WEIGHT: u32 = 4;

/// Place weight of `rank_c`.
const RANK_C_WEIGHT: u32 = 12;

/// Forward and reverse mapping between permutations and identifiers.
///
/// # Example
///
/// ```rust
/// use permtable::core::Permutation;
/// use permtable::indexer::PermutationIndexer;
///
/// let indexer = PermutationIndexer::build().unwrap();
///
/// let id = indexer.lookup(Permutation::new(3, 2, 1, 0)).unwrap();
/// assert_eq!(id.get(), 23);
/// assert_eq!(indexer.decode(id), Some(Permutation::new(3, 2, 1, 0)));
/// ```
#[derive(Clone, Debug)]
pub struct PermutationIndexer {
    forward: ForwardTable,
    reverse: [Option<Permutation>; PERMUTATIONS],
}

impl PermutationIndexer {
    /// Assign an identifier to every permutation.
    ///
    /// Stops at the first packed key or identifier that fails its range or
    /// low-bit check. Uniqueness is checked separately by
    /// [`PermutationIndexer::validate`] so that all repeats are reported.
    pub fn build() -> Result<Self, ViolationError> {
        let mut forward = ForwardTable::new();
        let mut reverse = [None; PERMUTATIONS];

        for permutation in Permutation::all() {
            let key = permutation.packed_key()?;
            let id = Self::assign(permutation)?;
            debug!(%permutation, key = key.get(), %id, "assigned permutation id");

            forward.insert(key, id);
            if reverse[id.as_index()].is_none() {
                reverse[id.as_index()] = Some(permutation);
            }
        }

        Ok(Self { forward, reverse })
    }

    /// Compute the identifier of a permutation from its ranks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use permtable::core::Permutation;
    /// use permtable::indexer::PermutationIndexer;
    ///
    /// let id = PermutationIndexer::assign(Permutation::new(0, 1, 2, 3)).unwrap();
    /// assert_eq!(id.get(), 0);
    ///
    /// // rank_b = 2 (2 in [0, 1, 2]), rank_c = 1 (1 in [0, 1]): 12 + 8 + 3
    /// let id = PermutationIndexer::assign(Permutation::new(3, 2, 1, 0)).unwrap();
    /// assert_eq!(id.get(), 23);
    /// ```
    pub fn assign(permutation: Permutation) -> Result<PermutationId, ViolationError> {
        let [a, b, c, _] = permutation.digits();
        let not_a_permutation = || ViolationError::NotAPermutation { tuple: permutation };
        if !permutation.is_valid() {
            return Err(not_a_permutation());
        }

        let rank_b = rank_among_remaining(b, &[a]).ok_or_else(not_a_permutation)?;
        let rank_c = rank_among_remaining(c, &[a, b]).ok_or_else(not_a_permutation)?;
        let raw = RANK_C_WEIGHT * u32::from(rank_c)
            + RANK_B_WEIGHT * u32::from(rank_b)
            + u32::from(a);

        check_identifier(permutation, raw)
    }

    /// Read the identifier stored for `permutation`.
    ///
    /// Returns `None` for tuples with repeated or out-of-field values.
    pub fn lookup(&self, permutation: Permutation) -> Option<PermutationId> {
        let key = permutation.packed_key().ok()?;
        self.forward.get(key)
    }

    /// The permutation an identifier was assigned to.
    pub fn decode(&self, id: PermutationId) -> Option<Permutation> {
        self.reverse[id.as_index()]
    }

    pub fn forward(&self) -> &ForwardTable {
        &self.forward
    }

    /// Check that no identifier was assigned to two permutations.
    pub fn validate(&self) -> CheckResult {
        rules::unique_identifiers(&self.forward)
    }
}

/// Accept a raw identifier for `permutation` only if it lies in `[0, 24)`
/// and its low two bits equal the permutation's first element.
pub fn check_identifier(
    permutation: Permutation,
    raw: u32,
) -> Result<PermutationId, ViolationError> {
    let id = u8::try_from(raw)
        .ok()
        .and_then(PermutationId::new)
        .ok_or(ViolationError::RangeViolation {
            what: "id",
            tuple: permutation,
            value: raw,
            bound: PERMUTATIONS as u32,
        })?;

    if id.first() != permutation.first() {
        return Err(ViolationError::LowBitMismatch {
            tuple: permutation,
            id: raw,
        });
    }

    Ok(id)
}
