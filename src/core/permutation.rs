//! Permutations of the four symbols `{0, 1, 2, 3}` and their packed keys.
//!
//! A permutation is a plain value: an ordered 4-tuple. Its packed key
//! places each element into a 2-bit field so that any tuple over
//! `{0, 1, 2, 3}` maps to a direct-lookup index in `[0, 256)`.

use crate::enforcement::ViolationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symbols being permuted.
pub const SYMBOLS: u8 = 4;

/// Number of distinct permutations of [`SYMBOLS`] symbols (4!).
pub const PERMUTATIONS: usize = 24;

/// Number of slots addressable by a [`PackedKey`].
pub const PACKED_KEY_SPACE: u32 = 256;

/// An ordered 4-tuple `(a, b, c, d)` over the values `{0, 1, 2, 3}`.
///
/// Construction does not enforce that every value appears exactly once;
/// tuples with repeated values are representable so diagnostics can name
/// them. Use [`Permutation::is_valid`] to tell the two apart, and
/// [`Permutation::all`] to obtain exactly the 24 valid ones.
///
/// # Example
///
/// ```rust
/// use permtable::core::Permutation;
///
/// let p = Permutation::new(3, 2, 1, 0);
/// assert!(p.is_valid());
/// assert_eq!(p.first(), 3);
/// assert!(!Permutation::new(0, 0, 1, 2).is_valid());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Permutation([u8; 4]);

impl Permutation {
    /// The identity ordering `(0, 1, 2, 3)`.
    pub const IDENTITY: Self = Self([0, 1, 2, 3]);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    pub const fn digits(&self) -> [u8; 4] {
        self.0
    }

    /// The leading element `a`.
    pub const fn first(&self) -> u8 {
        self.0[0]
    }

    /// True when the tuple uses each of `{0, 1, 2, 3}` exactly once.
    pub fn is_valid(&self) -> bool {
        let mut seen = 0u8;
        for &digit in &self.0 {
            if digit >= SYMBOLS || seen & (1 << digit) != 0 {
                return false;
            }
            seen |= 1 << digit;
        }
        true
    }

    /// Pack the tuple into its 8-bit direct-lookup key.
    ///
    /// Fails with [`ViolationError::RangeViolation`] if the computed key
    /// falls outside `[0, 256)`, which happens only when an element does
    /// not fit its 2-bit field.
    pub fn packed_key(&self) -> Result<PackedKey, ViolationError> {
        let [a, b, c, d] = self.0.map(u32::from);
        let key = (a << 6) | (b << 4) | (c << 2) | d;
        u8::try_from(key)
            .map(PackedKey)
            .map_err(|_| ViolationError::RangeViolation {
                what: "index",
                tuple: *self,
                value: key,
                bound: PACKED_KEY_SPACE,
            })
    }

    /// Recover the tuple stored in a packed key.
    ///
    /// Every key decodes to some tuple; only 24 of them are valid
    /// permutations.
    pub const fn from_packed_key(key: PackedKey) -> Self {
        let k = key.0;
        Self([(k >> 6) & 3, (k >> 4) & 3, (k >> 2) & 3, k & 3])
    }

    /// Enumerate all 24 permutations.
    ///
    /// The order is nested selection: `a` ascending, then `b` ascending
    /// among the values left after `a`, then `c` ascending among the values
    /// left after `a` and `b`; `d` is whatever remains.
    ///
    /// # Example
    ///
    /// ```rust
    /// use permtable::core::Permutation;
    ///
    /// let all = Permutation::all();
    /// assert_eq!(all.len(), 24);
    /// assert_eq!(all[0], Permutation::new(0, 1, 2, 3));
    /// assert_eq!(all[1], Permutation::new(0, 1, 3, 2));
    /// assert_eq!(all[23], Permutation::new(3, 2, 1, 0));
    /// ```
    pub fn all() -> Vec<Self> {
        let mut out = Vec::with_capacity(PERMUTATIONS);
        for a in 0..SYMBOLS {
            for b in remaining(&[a]) {
                for c in remaining(&[a, b]) {
                    let d = remaining(&[a, b, c])[0];
                    out.push(Self([a, b, c, d]));
                }
            }
        }
        out
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "({a}, {b}, {c}, {d})")
    }
}

/// The 8-bit direct-lookup index of a tuple: `a` in bits 6-7, `b` in
/// bits 4-5, `c` in bits 2-3 and `d` in bits 0-1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct PackedKey(u8);

impl PackedKey {
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_index(self) -> usize {
        self.0 as usize
    }
}

/// The values of `{0, 1, 2, 3}` not in `chosen`, in increasing order.
pub fn remaining(chosen: &[u8]) -> Vec<u8> {
    (0..SYMBOLS).filter(|v| !chosen.contains(v)).collect()
}

/// 0-based rank of `value` within the ascending list of values not yet in
/// `chosen`, or `None` if `value` was already chosen.
///
/// # Example
///
/// ```rust
/// use permtable::core::rank_among_remaining;
///
/// // After choosing 3, the remaining values are [0, 1, 2].
/// assert_eq!(rank_among_remaining(2, &[3]), Some(2));
/// // After choosing 3 and 2, the remaining values are [0, 1].
/// assert_eq!(rank_among_remaining(1, &[3, 2]), Some(1));
/// assert_eq!(rank_among_remaining(3, &[3]), None);
/// ```
pub fn rank_among_remaining(value: u8, chosen: &[u8]) -> Option<u8> {
    remaining(chosen)
        .iter()
        .position(|&v| v == value)
        .and_then(|pos| u8::try_from(pos).ok())
}
