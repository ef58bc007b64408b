//! Elements and the effectiveness table.
//!
//! The effectiveness cycle is fixed: fire beats grass, water beats fire,
//! grass beats water. Attacking into the inverse of a winning pair deals
//! half damage; every other pairing is neutral.

use strum::{Display, EnumIter, EnumString};

/// Elemental affinity of a species or ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Element {
    Normal,
    Fire,
    Water,
    // Legacy data files spell this "plant".
    #[strum(to_string = "grass", serialize = "grass", serialize = "plant")]
    #[cfg_attr(feature = "serde", serde(alias = "plant"))]
    Grass,
    Flying,
    Bug,
}

impl Element {
    /// Returns true if an attack of this element deals double damage to the
    /// given defender element.
    pub const fn beats(self, defender: Element) -> bool {
        matches!(
            (self, defender),
            (Element::Fire, Element::Grass)
                | (Element::Water, Element::Fire)
                | (Element::Grass, Element::Water)
        )
    }

    /// Damage multiplier for an attack of this element against a defender.
    ///
    /// Evaluated in order: ×2.0 on a winning pair, ×0.5 on a losing pair,
    /// ×1.0 otherwise. The table is symmetric-exclusive: no pair can match
    /// both rules.
    pub fn multiplier_against(self, defender: Element) -> f32 {
        if self.beats(defender) {
            2.0
        } else if defender.beats(self) {
            0.5
        } else {
            1.0
        }
    }
}
