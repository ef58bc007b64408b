//! Species catalog oracle.

use std::fmt;

use crate::element::Element;

use super::abilities::AbilityKey;

/// String identifier of a species, e.g. `"embercan"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeciesKey(String);

impl SpeciesKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpeciesKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Per-level base stats. Every derived stat is `base × level`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_health: f32,
    pub max_energy: f32,
    pub attack: f32,
    pub defense: f32,
    /// Energy regain rate carried from the data tables. Battles do not
    /// tick it; energy comes back only through healing.
    pub recovery: f32,
    /// Initiative gained per second of unpaused battle time.
    pub speed: f32,
}

/// Evolution target reached by leveling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionDef {
    pub into: SpeciesKey,
    pub at_level: u32,
}

/// Static, read-only definition of a species.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesDef {
    pub element: Element,
    pub stats: BaseStats,
    /// Abilities and the level at which each unlocks, in unlock order.
    pub abilities: Vec<(u32, AbilityKey)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evolution: Option<EvolutionDef>,
}

/// Oracle providing species definitions keyed by name.
pub trait SpeciesOracle: Send + Sync {
    fn species(&self, key: &SpeciesKey) -> Option<&SpeciesDef>;
}
