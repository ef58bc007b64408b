//! Trainer roster oracle.
//!
//! Consulted during encounter construction only; the battle session itself
//! never needs trainer data.

use super::species::SpeciesKey;

/// Static definition of a trainer's battle-relevant data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainerDef {
    /// Party in slot order as `(species, level)` pairs.
    pub roster: Vec<(SpeciesKey, u32)>,
    /// Battle backdrop selector, forwarded to the renderer untouched.
    pub biome: String,
}

/// Oracle providing trainer definitions keyed by map identifier.
pub trait TrainerOracle: Send + Sync {
    fn trainer(&self, id: &str) -> Option<&TrainerDef>;
}
