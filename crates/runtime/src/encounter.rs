//! Encounter construction.
//!
//! Opponent parties are battle-scoped: built fresh for every encounter and
//! dropped with the session. Trainer encounters come from the roster
//! oracle; wild encounters come from spawn points with a jittered level.

use std::collections::BTreeSet;

use battle_core::Party;
use battle_core::env::{SpeciesKey, SpeciesOracle, TrainerOracle};
use rand::Rng;

use crate::error::{Result, RuntimeError};

/// How far a wild combatant's level may stray from its spawn point.
pub const WILD_LEVEL_JITTER: i32 = 3;

/// A trainer battle ready to start.
#[derive(Debug)]
pub struct TrainerEncounter {
    pub party: Party,
    /// Battle backdrop selector for the renderer.
    pub biome: String,
}

/// Builds the opponent party for a trainer battle from the roster oracle.
pub fn trainer_encounter(
    id: &str,
    trainers: &dyn TrainerOracle,
    species: &dyn SpeciesOracle,
) -> Result<TrainerEncounter> {
    let def = trainers
        .trainer(id)
        .ok_or_else(|| RuntimeError::UnknownTrainer(id.to_owned()))?;
    let party = Party::from_specs(&def.roster, species)?;
    tracing::debug!(trainer = id, members = party.len(), "built trainer encounter");
    Ok(TrainerEncounter {
        party,
        biome: def.biome.clone(),
    })
}

/// A wild spawn point: the species pool it fields and its nominal level.
#[derive(Clone, Debug)]
pub struct WildSpawn {
    pub species: Vec<SpeciesKey>,
    pub level: u32,
    pub biome: String,
}

/// Builds a wild opponent party: one combatant per pool entry, each at the
/// spawn level jittered by up to [`WILD_LEVEL_JITTER`] in either direction
/// (floored at 1).
pub fn wild_party(
    spawn: &WildSpawn,
    species: &dyn SpeciesOracle,
    rng: &mut impl Rng,
) -> Result<Party> {
    let specs: Vec<(SpeciesKey, u32)> = spawn
        .species
        .iter()
        .map(|key| {
            let jitter = rng.gen_range(-WILD_LEVEL_JITTER..=WILD_LEVEL_JITTER);
            let level = (spawn.level as i32 + jitter).max(1) as u32;
            (key.clone(), level)
        })
        .collect();
    let party = Party::from_specs(&specs, species)?;
    tracing::debug!(
        biome = spawn.biome,
        members = party.len(),
        "built wild encounter"
    );
    Ok(party)
}

/// Which trainers have been beaten. Defeated trainers do not re-engage.
#[derive(Clone, Debug, Default)]
pub struct TrainerLedger {
    defeated: BTreeSet<String>,
}

impl TrainerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_defeated(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::info!(trainer = id, "trainer defeated");
        self.defeated.insert(id);
    }

    pub fn is_defeated(&self, id: &str) -> bool {
        self.defeated.contains(id)
    }
}
