//! Property-based tests for the permutation encoding and transition table.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use permtable::core::{Permutation, Reorder};
use permtable::indexer::{PermutationId, PermutationIndexer};
use permtable::table::{TransitionTable, TransitionTableBuilder};
use proptest::prelude::*;

fn fixtures() -> (PermutationIndexer, TransitionTable) {
    let indexer = PermutationIndexer::build().unwrap();
    let table = TransitionTableBuilder::new(&indexer).build().unwrap();
    (indexer, table)
}

prop_compose! {
    fn arbitrary_permutation()(index in 0..24usize) -> Permutation {
        Permutation::all()[index]
    }
}

prop_compose! {
    fn arbitrary_id()(raw in 0..24u8) -> PermutationId {
        PermutationId::new(raw).unwrap()
    }
}

prop_compose! {
    fn arbitrary_reorder()(index in 0..4usize) -> Reorder {
        Reorder::ALL[index]
    }
}

proptest! {
    #[test]
    fn low_bits_equal_first_element(p in arbitrary_permutation()) {
        let id = PermutationIndexer::assign(p).unwrap();
        prop_assert_eq!(id.get() % 4, p.first());
    }

    #[test]
    fn packed_key_roundtrip_preserves_id(p in arbitrary_permutation()) {
        let (indexer, _) = fixtures();
        let key = p.packed_key().unwrap();
        let decoded = Permutation::from_packed_key(key);

        prop_assert_eq!(decoded, p);
        prop_assert_eq!(
            PermutationIndexer::assign(decoded).unwrap(),
            indexer.lookup(p).unwrap()
        );
    }

    #[test]
    fn forward_lookup_matches_assign(p in arbitrary_permutation()) {
        let (indexer, _) = fixtures();
        prop_assert_eq!(indexer.lookup(p), Some(PermutationIndexer::assign(p).unwrap()));
    }

    #[test]
    fn random_tuples_resolve_only_when_valid(
        a in 0..4u8, b in 0..4u8, c in 0..4u8, d in 0..4u8
    ) {
        let (indexer, _) = fixtures();
        let tuple = Permutation::new(a, b, c, d);
        prop_assert_eq!(indexer.lookup(tuple).is_some(), tuple.is_valid());
    }

    #[test]
    fn transitions_stay_within_valid_ids(id in arbitrary_id(), op in arbitrary_reorder()) {
        let (_, table) = fixtures();
        let target = table.get(id, op);
        prop_assert!(target.is_some());
        prop_assert!(target.unwrap().get() < 24);
    }

    #[test]
    fn transition_follows_operation(id in arbitrary_id(), op in arbitrary_reorder()) {
        let (indexer, table) = fixtures();
        let from = indexer.decode(id).unwrap();
        let to = table.get(id, op).unwrap();
        prop_assert_eq!(indexer.decode(to), Some(op.apply(from)));
    }

    #[test]
    fn walking_table_matches_applying_operations(
        id in arbitrary_id(),
        ops in prop::collection::vec(arbitrary_reorder(), 0..12)
    ) {
        let (indexer, table) = fixtures();

        let walked = table.step(id, ops.iter().copied()).unwrap();

        let applied = ops
            .iter()
            .fold(indexer.decode(id).unwrap(), |p, op| op.apply(p));
        prop_assert_eq!(indexer.decode(walked), Some(applied));
    }

    #[test]
    fn each_column_is_a_bijection(op in arbitrary_reorder()) {
        let (_, table) = fixtures();
        let mut targets: Vec<u8> = PermutationId::all()
            .map(|id| table.get(id, op).unwrap().get())
            .collect();
        targets.sort_unstable();
        prop_assert_eq!(targets, (0..24).collect::<Vec<u8>>());
    }
}

#[test]
fn ids_are_pairwise_distinct_and_dense() {
    let mut ids: Vec<u8> = Permutation::all()
        .into_iter()
        .map(|p| PermutationIndexer::assign(p).unwrap().get())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..24).collect::<Vec<u8>>());
}

#[test]
fn identity_op_is_fixed_point_everywhere() {
    let (_, table) = fixtures();
    for id in PermutationId::all() {
        assert_eq!(table.get(id, Reorder::Identity), Some(id));
    }
}

#[test]
fn known_scenarios() {
    let (indexer, table) = fixtures();

    assert_eq!(indexer.lookup(Permutation::new(0, 1, 2, 3)).unwrap().get(), 0);
    assert_eq!(indexer.lookup(Permutation::new(3, 2, 1, 0)).unwrap().get(), 23);

    let swapped = table.get(PermutationId::MIN, Reorder::SwapFirstTwo).unwrap();
    assert_eq!(Some(swapped), indexer.lookup(Permutation::new(1, 0, 2, 3)));
    assert_eq!(swapped.get() % 4, 1);
}
