//! Slot-indexed creature collections.
//!
//! A party maps stable slot indices to combatants. Slots are distinct from
//! field positions: at most [`MAX_FIELDED`](crate::session::MAX_FIELDED)
//! members occupy the field at once, the rest sit in reserve. The player
//! party persists across battles; opponent parties are battle-scoped.

use std::collections::BTreeMap;

use crate::combatant::Combatant;
use crate::env::{OracleError, SpeciesKey, SpeciesOracle};

/// Stable index of a party slot.
pub type SlotIndex = u8;

/// Ordered, slot-addressed collection of combatants for one side.
#[derive(Clone, Debug, Default)]
pub struct Party {
    members: BTreeMap<SlotIndex, Combatant>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a party from `(species, level)` pairs in slot order. Fails on
    /// the first unknown species key.
    pub fn from_specs<K>(specs: &[(K, u32)], oracle: &dyn SpeciesOracle) -> Result<Self, OracleError>
    where
        K: Clone + Into<SpeciesKey>,
    {
        let mut party = Self::new();
        for (species, level) in specs {
            party.insert(Combatant::new(species.clone(), *level, oracle)?);
        }
        Ok(party)
    }

    /// Adds a combatant at the next free slot and returns that slot.
    pub fn insert(&mut self, combatant: Combatant) -> SlotIndex {
        let slot = self.next_slot();
        self.members.insert(slot, combatant);
        slot
    }

    fn next_slot(&self) -> SlotIndex {
        self.members
            .keys()
            .next_back()
            .map_or(0, |last| last + 1)
    }

    pub fn get(&self, slot: SlotIndex) -> Option<&Combatant> {
        self.members.get(&slot)
    }

    pub fn get_mut(&mut self, slot: SlotIndex) -> Option<&mut Combatant> {
        self.members.get_mut(&slot)
    }

    pub fn remove(&mut self, slot: SlotIndex) -> Option<Combatant> {
        self.members.remove(&slot)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &Combatant)> {
        self.members.iter().map(|(slot, c)| (*slot, c))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotIndex, &mut Combatant)> {
        self.members.iter_mut().map(|(slot, c)| (*slot, c))
    }

    /// Lowest-numbered reserve slot, skipping `excluded` (fielded members
    /// and slots already claimed as replacements). Used for the opponent
    /// side, which queues reserves in slot order regardless of condition.
    pub fn next_reserve(&self, excluded: &[SlotIndex]) -> Option<SlotIndex> {
        self.members
            .keys()
            .copied()
            .find(|slot| !excluded.contains(slot))
    }

    /// Lowest-numbered reserve slot holding a healthy combatant. Used for
    /// the player side: fainted members are never selectable as switch-ins
    /// or automatic replacements.
    pub fn next_healthy_reserve(&self, excluded: &[SlotIndex]) -> Option<SlotIndex> {
        self.healthy_reserves(excluded).into_iter().next()
    }

    /// All switch-in candidates in slot order: alive and not excluded.
    pub fn healthy_reserves(&self, excluded: &[SlotIndex]) -> Vec<SlotIndex> {
        self.members
            .iter()
            .filter(|(slot, c)| !excluded.contains(slot) && !c.is_fainted())
            .map(|(slot, _)| *slot)
            .collect()
    }
}
