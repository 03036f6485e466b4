//! The 24×4 transition table.
//!
//! Row `id` holds, for each [`Reorder`] operation, the identifier of the
//! permutation reached by applying that operation to the permutation named
//! by `id`. Cells start unassigned and are written exactly once by
//! [`TransitionTableBuilder`].

mod builder;
mod format;

pub use builder::TransitionTableBuilder;

use crate::core::{Reorder, PERMUTATIONS};
use crate::enforcement::{rules, CheckResult, ViolationError};
use crate::indexer::PermutationId;
use serde::{Deserialize, Serialize};

/// Byte written for a cell that was never populated.
pub const UNASSIGNED: u8 = 0xff;

/// Number of operations, i.e. table columns.
pub const OPERATIONS: usize = Reorder::ALL.len();

/// Transition grid indexed by `(PermutationId, Reorder)`.
///
/// # Example
///
/// ```rust
/// use permtable::core::Reorder;
/// use permtable::indexer::{PermutationId, PermutationIndexer};
/// use permtable::table::TransitionTableBuilder;
///
/// let indexer = PermutationIndexer::build().unwrap();
/// let table = TransitionTableBuilder::new(&indexer).build().unwrap();
///
/// let start = PermutationId::MIN;
/// let next = table.get(start, Reorder::SwapFirstTwo).unwrap();
/// assert_eq!(next.first(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionTable {
    cells: [[Option<PermutationId>; OPERATIONS]; PERMUTATIONS],
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl TransitionTable {
    /// A table with every cell unassigned.
    pub fn empty() -> Self {
        Self {
            cells: [[None; OPERATIONS]; PERMUTATIONS],
        }
    }

    pub fn get(&self, id: PermutationId, op: Reorder) -> Option<PermutationId> {
        self.cells[id.as_index()][op.index()]
    }

    /// Populate a cell.
    ///
    /// A cell may only be written once; a second write of any value is a
    /// defect in the operations or the encoding.
    pub fn set(
        &mut self,
        id: PermutationId,
        op: Reorder,
        target: PermutationId,
    ) -> Result<(), ViolationError> {
        let cell = &mut self.cells[id.as_index()][op.index()];
        if cell.is_some() {
            return Err(ViolationError::CellOverwritten { id: id.get(), op });
        }
        *cell = Some(target);
        Ok(())
    }

    /// Follow a sequence of operations starting from `start`.
    ///
    /// Returns `None` if the walk reaches an unassigned cell.
    pub fn step<I>(&self, start: PermutationId, ops: I) -> Option<PermutationId>
    where
        I: IntoIterator<Item = Reorder>,
    {
        ops.into_iter()
            .try_fold(start, |current, op| self.get(current, op))
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Check that no cell remains unassigned.
    pub fn validate(&self) -> CheckResult {
        rules::complete_table(self)
    }

    /// Raw bytes in row-major order, with [`UNASSIGNED`] for empty cells.
    pub fn rows(&self) -> [[u8; OPERATIONS]; PERMUTATIONS] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or(UNASSIGNED, PermutationId::get)))
    }
}
