//! Ability catalog oracle.

use std::fmt;

use crate::element::Element;

/// String identifier of an ability, e.g. `"scratch"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityKey(String);

impl AbilityKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Which side an ability is aimed at, relative to its user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetSide {
    /// The user's own side (heals and buffs).
    Own,
    /// The opposing side.
    Opposing,
}

/// Static, read-only definition of an ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDef {
    pub target: TargetSide,
    /// Damage multiplier applied to the user's attack stat. Negative values
    /// aimed at the own side act as heals.
    pub amount: f32,
    pub cost: f32,
    pub element: Element,
    /// Visual/audio cue key handed to the rendering layer.
    pub animation: String,
}

/// Oracle providing ability definitions keyed by name.
pub trait AbilityOracle: Send + Sync {
    fn ability(&self, key: &AbilityKey) -> Option<&AbilityDef>;
}
