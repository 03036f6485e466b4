//! Builder that populates the transition table from an indexer.

use super::TransitionTable;
use crate::core::{Permutation, Reorder};
use crate::enforcement::ViolationError;
use crate::indexer::PermutationIndexer;
use tracing::debug;

/// Computes every `(id, op)` cell from the indexer's forward mapping.
pub struct TransitionTableBuilder<'a> {
    indexer: &'a PermutationIndexer,
}

impl<'a> TransitionTableBuilder<'a> {
    pub fn new(indexer: &'a PermutationIndexer) -> Self {
        Self { indexer }
    }

    /// Visit each permutation once and write its four transitions.
    ///
    /// A transformed tuple with no identifier leaves its cell unassigned;
    /// [`TransitionTable::validate`] reports it afterwards. Writing a cell
    /// twice fails immediately.
    pub fn build(&self) -> Result<TransitionTable, ViolationError> {
        let mut table = TransitionTable::empty();

        for permutation in Permutation::all() {
            let id = PermutationIndexer::assign(permutation)?;

            for op in Reorder::ALL {
                if let Some(target) = self.indexer.lookup(op.apply(permutation)) {
                    table.set(id, op, target)?;
                }
            }

            debug!(%permutation, %id, row = ?table.rows()[id.as_index()], "filled table row");
        }

        Ok(table)
    }
}
