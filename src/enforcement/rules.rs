//! Post-construction checks using Validation.
//!
//! Each check reports every offending entry instead of stopping at the
//! first one.

use crate::core::{Permutation, Reorder, PERMUTATIONS};
use crate::enforcement::violations::ViolationError;
use crate::indexer::{ForwardTable, PermutationId};
use crate::table::TransitionTable;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for the result of a single check
pub type CheckResult = Validation<(), NonEmptyVec<ViolationError>>;

/// Verify that no identifier appears twice in the forward table.
pub fn unique_identifiers(forward: &ForwardTable) -> CheckResult {
    let mut checks: Vec<CheckResult> = Vec::new();
    let mut seen: u32 = 0;
    let mut owners: [Option<Permutation>; PERMUTATIONS] = [None; PERMUTATIONS];

    for (permutation, id) in forward.entries() {
        let bit = 1u32 << id.get();
        let check = if seen & bit != 0 {
            Validation::fail(ViolationError::DuplicateIdentifier {
                id: id.get(),
                first: owners[id.as_index()].unwrap_or(permutation),
                second: permutation,
            })
        } else {
            seen |= bit;
            owners[id.as_index()] = Some(permutation);
            Validation::success(())
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Verify that all 96 cells of the transition table are populated.
pub fn complete_table(table: &TransitionTable) -> CheckResult {
    let mut checks: Vec<CheckResult> = Vec::new();

    for id in PermutationId::all() {
        for op in Reorder::ALL {
            let check = if table.get(id, op).is_some() {
                Validation::success(())
            } else {
                Validation::fail(ViolationError::IncompleteTable { id: id.get(), op })
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
