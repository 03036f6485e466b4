//! Direct-lookup table from packed key to identifier.

use super::id::PermutationId;
use crate::core::{PackedKey, Permutation, PACKED_KEY_SPACE};

/// 256-slot table indexed by [`PackedKey`].
///
/// Only the 24 slots whose key decodes to a valid permutation are ever
/// assigned; every other slot stays `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardTable {
    slots: [Option<PermutationId>; PACKED_KEY_SPACE as usize],
}

impl Default for ForwardTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardTable {
    pub fn new() -> Self {
        Self {
            slots: [None; PACKED_KEY_SPACE as usize],
        }
    }

    pub fn get(&self, key: PackedKey) -> Option<PermutationId> {
        self.slots[key.as_index()]
    }

    /// Store `id` at `key`, returning the identifier previously there.
    pub fn insert(&mut self, key: PackedKey, id: PermutationId) -> Option<PermutationId> {
        self.slots[key.as_index()].replace(id)
    }

    /// Assigned slots in ascending key order, with their decoded tuples.
    pub fn entries(&self) -> impl Iterator<Item = (Permutation, PermutationId)> + '_ {
        self.slots.iter().enumerate().filter_map(|(raw, slot)| {
            let key = PackedKey::new(u8::try_from(raw).ok()?);
            slot.map(|id| (Permutation::from_packed_key(key), id))
        })
    }

    pub fn assigned(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
