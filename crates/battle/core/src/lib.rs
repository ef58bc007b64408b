//! Deterministic turn-resolution engine for creature battles.
//!
//! The crate owns battle state and rules only: initiative-driven turn
//! scheduling, the player decision menus, damage and capture resolution,
//! and experience awards. Everything else is injected. Static content
//! (species stats, ability tables) comes in through the read-only oracles
//! in [`env`]; randomness is a seeded oracle; rendering and audio observe
//! the battle through drained [`session::BattleEvent`]s and the
//! [`session::RenderState`] snapshot. Given the same parties, seed, and
//! input frames, a battle replays identically.

pub mod combatant;
pub mod config;
pub mod element;
pub mod env;
pub mod party;
pub mod session;
pub mod timer;

pub use combatant::{Combatant, StatKind};
pub use config::BattleConfig;
pub use element::Element;
pub use party::{Party, SlotIndex};
pub use session::{
    ActorRef, BattleEvent, BattleKind, BattleOutcome, BattleSession, FieldPosition, GeneralOption,
    InputFrame, MAX_FIELDED, RenderState, SelectionMode, SessionError, Side, TurnPhase,
};
pub use timer::Timer;

/// In-memory oracles with a small fixed bestiary, shared across the crate's
/// unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use crate::element::Element;
    use crate::env::{
        AbilityDef, AbilityKey, AbilityOracle, BaseStats, ContentEnv, EvolutionDef, PcgRng,
        SpeciesDef, SpeciesKey, SpeciesOracle, TargetSide,
    };

    pub(crate) struct TestSpecies {
        defs: HashMap<SpeciesKey, SpeciesDef>,
    }

    impl Default for TestSpecies {
        fn default() -> Self {
            let mut defs = HashMap::new();
            defs.insert(
                SpeciesKey::new("cinderpup"),
                SpeciesDef {
                    element: Element::Fire,
                    stats: BaseStats {
                        max_health: 60.0,
                        max_energy: 50.0,
                        attack: 50.0,
                        defense: 40.0,
                        recovery: 1.0,
                        speed: 60.0,
                    },
                    abilities: vec![
                        (0, AbilityKey::new("scratch")),
                        (5, AbilityKey::new("ember")),
                    ],
                    evolution: Some(EvolutionDef {
                        into: SpeciesKey::new("ashhound"),
                        at_level: 12,
                    }),
                },
            );
            defs.insert(
                SpeciesKey::new("ashhound"),
                SpeciesDef {
                    element: Element::Fire,
                    stats: BaseStats {
                        max_health: 90.0,
                        max_energy: 70.0,
                        attack: 70.0,
                        defense: 60.0,
                        recovery: 1.2,
                        speed: 70.0,
                    },
                    abilities: vec![
                        (0, AbilityKey::new("scratch")),
                        (5, AbilityKey::new("ember")),
                    ],
                    evolution: None,
                },
            );
            defs.insert(
                SpeciesKey::new("thornling"),
                SpeciesDef {
                    element: Element::Grass,
                    stats: BaseStats {
                        max_health: 70.0,
                        max_energy: 60.0,
                        attack: 40.0,
                        defense: 50.0,
                        recovery: 1.5,
                        speed: 50.0,
                    },
                    abilities: vec![(0, AbilityKey::new("scratch")), (0, AbilityKey::new("heal"))],
                    evolution: None,
                },
            );
            defs.insert(
                SpeciesKey::new("mistfin"),
                SpeciesDef {
                    element: Element::Water,
                    stats: BaseStats {
                        max_health: 65.0,
                        max_energy: 55.0,
                        attack: 45.0,
                        defense: 45.0,
                        recovery: 1.0,
                        speed: 55.0,
                    },
                    abilities: vec![(0, AbilityKey::new("splash"))],
                    evolution: None,
                },
            );
            // Inert punching bag: zero speed (never acts), zero defense
            // (damage lands unscaled).
            defs.insert(
                SpeciesKey::new("dummy"),
                SpeciesDef {
                    element: Element::Normal,
                    stats: BaseStats {
                        max_health: 1000.0,
                        max_energy: 50.0,
                        attack: 10.0,
                        defense: 0.0,
                        recovery: 0.0,
                        speed: 0.0,
                    },
                    abilities: vec![(0, AbilityKey::new("scratch"))],
                    evolution: None,
                },
            );
            Self { defs }
        }
    }

    impl TestSpecies {
        pub(crate) fn insert(&mut self, key: &str, def: SpeciesDef) {
            self.defs.insert(SpeciesKey::new(key), def);
        }
    }

    impl SpeciesOracle for TestSpecies {
        fn species(&self, key: &SpeciesKey) -> Option<&SpeciesDef> {
            self.defs.get(key)
        }
    }

    pub(crate) struct TestAbilities {
        defs: HashMap<AbilityKey, AbilityDef>,
    }

    impl Default for TestAbilities {
        fn default() -> Self {
            let mut defs = HashMap::new();
            defs.insert(
                AbilityKey::new("scratch"),
                AbilityDef {
                    target: TargetSide::Opposing,
                    amount: 1.2,
                    cost: 20.0,
                    element: Element::Normal,
                    animation: "scratch".into(),
                },
            );
            defs.insert(
                AbilityKey::new("ember"),
                AbilityDef {
                    target: TargetSide::Opposing,
                    amount: 2.0,
                    cost: 15.0,
                    element: Element::Fire,
                    animation: "fire".into(),
                },
            );
            defs.insert(
                AbilityKey::new("splash"),
                AbilityDef {
                    target: TargetSide::Opposing,
                    amount: 1.5,
                    cost: 15.0,
                    element: Element::Water,
                    animation: "splash".into(),
                },
            );
            defs.insert(
                AbilityKey::new("heal"),
                AbilityDef {
                    target: TargetSide::Own,
                    amount: -1.2,
                    cost: 60.0,
                    element: Element::Grass,
                    animation: "green".into(),
                },
            );
            Self { defs }
        }
    }

    impl AbilityOracle for TestAbilities {
        fn ability(&self, key: &AbilityKey) -> Option<&AbilityDef> {
            self.defs.get(key)
        }
    }

    /// Bundles the fixture oracles so tests can borrow a [`ContentEnv`] in
    /// one line.
    #[derive(Default)]
    pub(crate) struct TestEnv {
        pub species: TestSpecies,
        pub abilities: TestAbilities,
        pub rng: PcgRng,
    }

    impl TestEnv {
        pub(crate) fn env(&self) -> ContentEnv<'_> {
            ContentEnv::new(&self.species, &self.abilities, &self.rng)
        }
    }
}
