//! The four fixed reordering operations that label table columns.

use super::permutation::Permutation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reordering applied to a permutation `(a, b, c, d)`.
///
/// The discriminant is the operation's column in the transition table.
///
/// # Example
///
/// ```rust
/// use permtable::core::{Permutation, Reorder};
///
/// let p = Permutation::new(0, 1, 2, 3);
/// assert_eq!(Reorder::SwapFirstTwo.apply(p), Permutation::new(1, 0, 2, 3));
/// assert_eq!(Reorder::RotateFirstThree.apply(p), Permutation::new(2, 0, 1, 3));
/// assert_eq!(Reorder::RotateAll.apply(p), Permutation::new(3, 0, 1, 2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Reorder {
    /// `(a, b, c, d)`
    Identity = 0,
    /// `(b, a, c, d)`
    SwapFirstTwo = 1,
    /// `(c, a, b, d)`
    RotateFirstThree = 2,
    /// `(d, a, b, c)`
    RotateAll = 3,
}

impl Reorder {
    /// All operations in column order.
    pub const ALL: [Reorder; 4] = [
        Reorder::Identity,
        Reorder::SwapFirstTwo,
        Reorder::RotateFirstThree,
        Reorder::RotateAll,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Identity => "identity",
            Self::SwapFirstTwo => "swap-first-two",
            Self::RotateFirstThree => "rotate-first-three",
            Self::RotateAll => "rotate-all",
        }
    }

    pub const fn apply(self, permutation: Permutation) -> Permutation {
        let [a, b, c, d] = permutation.digits();
        match self {
            Self::Identity => Permutation::new(a, b, c, d),
            Self::SwapFirstTwo => Permutation::new(b, a, c, d),
            Self::RotateFirstThree => Permutation::new(c, a, b, d),
            Self::RotateAll => Permutation::new(d, a, b, c),
        }
    }
}

impl fmt::Display for Reorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.name())
    }
}
