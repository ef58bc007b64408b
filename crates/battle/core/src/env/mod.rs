//! Traits describing read-only game content.
//!
//! Oracles expose static species stats, ability tables, and trainer rosters.
//! The [`ContentEnv`] aggregate bundles the oracles a battle session needs so
//! the engine never reaches for ambient global tables. Catalogs are built
//! once at startup (see the `battle-content` crate) and injected by
//! reference.

mod abilities;
mod error;
mod rng;
mod species;
mod trainers;

pub use abilities::{AbilityDef, AbilityKey, AbilityOracle, TargetSide};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use species::{BaseStats, EvolutionDef, SpeciesDef, SpeciesKey, SpeciesOracle};
pub use trainers::{TrainerDef, TrainerOracle};

/// Aggregates the read-only oracles required while a battle is running.
///
/// Trainer rosters are only consulted during encounter construction and are
/// deliberately not part of the in-battle environment.
#[derive(Clone, Copy)]
pub struct ContentEnv<'a> {
    species: &'a dyn SpeciesOracle,
    abilities: &'a dyn AbilityOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> ContentEnv<'a> {
    pub fn new(
        species: &'a dyn SpeciesOracle,
        abilities: &'a dyn AbilityOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            species,
            abilities,
            rng,
        }
    }

    /// Looks up a species definition; an unknown key is a fatal
    /// misconfiguration surfaced during setup.
    pub fn species(&self, key: &SpeciesKey) -> Result<&'a SpeciesDef, OracleError> {
        self.species
            .species(key)
            .ok_or_else(|| OracleError::UnknownSpecies(key.clone()))
    }

    /// Looks up an ability definition.
    pub fn ability(&self, key: &AbilityKey) -> Result<&'a AbilityDef, OracleError> {
        self.abilities
            .ability(key)
            .ok_or_else(|| OracleError::UnknownAbility(key.clone()))
    }

    pub fn abilities(&self) -> &'a dyn AbilityOracle {
        self.abilities
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl std::fmt::Debug for ContentEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentEnv").finish_non_exhaustive()
    }
}
