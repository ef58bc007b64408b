//! In-memory catalogs implementing the content oracles.
//!
//! A catalog is a plain keyed map over the `battle-core` definition types.
//! [`SpeciesCatalog::builtin`] and friends carry the shipped game data; the
//! loaders in [`crate::loaders`] build the same catalogs from RON files.

use std::collections::BTreeMap;

use battle_core::Element;
use battle_core::env::{
    AbilityDef, AbilityKey, AbilityOracle, BaseStats, EvolutionDef, SpeciesDef, SpeciesKey,
    SpeciesOracle, TargetSide, TrainerDef, TrainerOracle,
};

/// Keyed species definitions.
#[derive(Clone, Debug, Default)]
pub struct SpeciesCatalog {
    defs: BTreeMap<SpeciesKey, SpeciesDef>,
}

impl SpeciesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<SpeciesKey>, def: SpeciesDef) {
        self.defs.insert(key.into(), def);
    }

    pub fn get(&self, key: &SpeciesKey) -> Option<&SpeciesDef> {
        self.defs.get(key)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SpeciesKey, &SpeciesDef)> {
        self.defs.iter()
    }

    /// The shipped bestiary: three elemental evolution lines, the flying
    /// lines, and the bug one-off.
    pub fn builtin() -> Self {
        fn def(
            element: Element,
            stats: [f32; 6],
            abilities: &[(u32, &str)],
            evolution: Option<(&str, u32)>,
        ) -> SpeciesDef {
            let [max_health, max_energy, attack, defense, recovery, speed] = stats;
            SpeciesDef {
                element,
                stats: BaseStats {
                    max_health,
                    max_energy,
                    attack,
                    defense,
                    recovery,
                    speed,
                },
                abilities: abilities
                    .iter()
                    .map(|(unlock, key)| (*unlock, AbilityKey::new(*key)))
                    .collect(),
                evolution: evolution.map(|(into, at_level)| EvolutionDef {
                    into: SpeciesKey::new(into),
                    at_level,
                }),
            }
        }

        let mut catalog = Self::new();

        // Fire line: embercan -> blazewhelp -> ignisblast.
        catalog.insert(
            "embercan",
            def(
                Element::Fire,
                [60.0, 50.0, 50.0, 40.0, 1.0, 60.0],
                &[(0, "scratch"), (5, "burn")],
                Some(("blazewhelp", 16)),
            ),
        );
        catalog.insert(
            "blazewhelp",
            def(
                Element::Fire,
                [100.0, 70.0, 80.0, 60.0, 1.0, 75.0],
                &[(0, "spark"), (5, "fire")],
                Some(("ignisblast", 32)),
            ),
        );
        catalog.insert(
            "ignisblast",
            def(
                Element::Fire,
                [150.0, 100.0, 120.0, 90.0, 1.0, 70.0],
                &[(0, "explosion"), (5, "annihilate")],
                None,
            ),
        );

        // Grass line: sapling -> wardensawi -> primalsauim.
        catalog.insert(
            "sapling",
            def(
                Element::Grass,
                [70.0, 60.0, 45.0, 50.0, 1.0, 70.0],
                &[(0, "scratch"), (5, "heal")],
                Some(("wardensawi", 16)),
            ),
        );
        catalog.insert(
            "wardensawi",
            def(
                Element::Grass,
                [110.0, 80.0, 75.0, 70.0, 1.0, 85.0],
                &[(0, "battlecry"), (5, "scratch")],
                Some(("primalsauim", 32)),
            ),
        );
        catalog.insert(
            "primalsauim",
            def(
                Element::Grass,
                [180.0, 90.0, 110.0, 110.0, 1.0, 60.0],
                &[(0, "scratch"), (5, "annihilate")],
                None,
            ),
        );

        // Water line: capiblu -> earthshroud.
        catalog.insert(
            "capiblu",
            def(
                Element::Water,
                [90.0, 50.0, 40.0, 60.0, 1.0, 40.0],
                &[(0, "scratch"), (5, "splash")],
                Some(("earthshroud", 28)),
            ),
        );
        catalog.insert(
            "earthshroud",
            def(
                Element::Water,
                [200.0, 80.0, 90.0, 130.0, 1.0, 30.0],
                &[(0, "explosion"), (5, "splash")],
                None,
            ),
        );

        // Flying line: araclaw -> araguara -> ararablair.
        catalog.insert(
            "araclaw",
            def(
                Element::Flying,
                [50.0, 50.0, 60.0, 30.0, 1.0, 90.0],
                &[(0, "scratch"), (5, "battlecry")],
                Some(("araguara", 14)),
            ),
        );
        catalog.insert(
            "araguara",
            def(
                Element::Flying,
                [120.0, 90.0, 95.0, 60.0, 1.0, 110.0],
                &[(0, "scratch"), (5, "annihilate")],
                Some(("ararablair", 30)),
            ),
        );
        catalog.insert(
            "ararablair",
            def(
                Element::Flying,
                [200.0, 130.0, 95.0, 60.0, 1.0, 135.0],
                &[(0, "scratch"), (5, "annihilate")],
                None,
            ),
        );

        // Second flying line: apexwing -> carcalon -> ibyracy.
        catalog.insert(
            "apexwing",
            def(
                Element::Flying,
                [60.0, 60.0, 70.0, 40.0, 1.0, 80.0],
                &[(0, "scratch"), (5, "fire")],
                Some(("carcalon", 18)),
            ),
        );
        catalog.insert(
            "carcalon",
            def(
                Element::Flying,
                [90.0, 70.0, 90.0, 55.0, 1.0, 90.0],
                &[(0, "scratch"), (5, "ice")],
                Some(("ibyracy", 30)),
            ),
        );
        catalog.insert(
            "ibyracy",
            def(
                Element::Flying,
                [130.0, 80.0, 110.0, 70.0, 1.0, 105.0],
                &[(0, "scratch"), (5, "battlecry")],
                None,
            ),
        );

        catalog.insert(
            "jatyglow",
            def(
                Element::Bug,
                [80.0, 80.0, 80.0, 60.0, 1.0, 100.0],
                &[(0, "scratch"), (5, "burn")],
                None,
            ),
        );

        catalog
    }
}

impl SpeciesOracle for SpeciesCatalog {
    fn species(&self, key: &SpeciesKey) -> Option<&SpeciesDef> {
        self.defs.get(key)
    }
}

impl FromIterator<(SpeciesKey, SpeciesDef)> for SpeciesCatalog {
    fn from_iter<I: IntoIterator<Item = (SpeciesKey, SpeciesDef)>>(iter: I) -> Self {
        Self {
            defs: iter.into_iter().collect(),
        }
    }
}

/// Keyed ability definitions.
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    defs: BTreeMap<AbilityKey, AbilityDef>,
}

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<AbilityKey>, def: AbilityDef) {
        self.defs.insert(key.into(), def);
    }

    pub fn get(&self, key: &AbilityKey) -> Option<&AbilityDef> {
        self.defs.get(key)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// The shipped attack table.
    pub fn builtin() -> Self {
        fn def(
            target: TargetSide,
            amount: f32,
            cost: f32,
            element: Element,
            animation: &str,
        ) -> AbilityDef {
            AbilityDef {
                target,
                amount,
                cost,
                element,
                animation: animation.to_owned(),
            }
        }

        let mut catalog = Self::new();
        catalog.insert("burn", def(TargetSide::Opposing, 2.0, 15.0, Element::Fire, "fire"));
        catalog.insert("heal", def(TargetSide::Own, -1.2, 60.0, Element::Grass, "green"));
        catalog.insert(
            "battlecry",
            def(TargetSide::Own, -1.4, 20.0, Element::Normal, "green"),
        );
        catalog.insert("spark", def(TargetSide::Opposing, 1.1, 20.0, Element::Fire, "fire"));
        catalog.insert(
            "scratch",
            def(TargetSide::Opposing, 1.2, 20.0, Element::Normal, "scratch"),
        );
        catalog.insert(
            "splash",
            def(TargetSide::Opposing, 2.0, 15.0, Element::Water, "splash"),
        );
        catalog.insert("fire", def(TargetSide::Opposing, 2.0, 15.0, Element::Fire, "fire"));
        catalog.insert(
            "explosion",
            def(TargetSide::Opposing, 2.0, 90.0, Element::Fire, "explosion"),
        );
        catalog.insert(
            "annihilate",
            def(TargetSide::Opposing, 3.0, 30.0, Element::Fire, "explosion"),
        );
        catalog.insert("ice", def(TargetSide::Opposing, 2.0, 15.0, Element::Water, "ice"));
        catalog
    }
}

impl AbilityOracle for AbilityCatalog {
    fn ability(&self, key: &AbilityKey) -> Option<&AbilityDef> {
        self.defs.get(key)
    }
}

impl FromIterator<(AbilityKey, AbilityDef)> for AbilityCatalog {
    fn from_iter<I: IntoIterator<Item = (AbilityKey, AbilityDef)>>(iter: I) -> Self {
        Self {
            defs: iter.into_iter().collect(),
        }
    }
}

/// Trainer rosters keyed by map identifier.
#[derive(Clone, Debug, Default)]
pub struct TrainerCatalog {
    defs: BTreeMap<String, TrainerDef>,
}

impl TrainerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, def: TrainerDef) {
        self.defs.insert(id.into(), def);
    }

    pub fn get(&self, id: &str) -> Option<&TrainerDef> {
        self.defs.get(id)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// The shipped trainer lineup, one entry per distinct roster.
    pub fn builtin() -> Self {
        fn def(roster: &[(&str, u32)], biome: &str) -> TrainerDef {
            TrainerDef {
                roster: roster
                    .iter()
                    .map(|(species, level)| (SpeciesKey::new(*species), *level))
                    .collect(),
                biome: biome.to_owned(),
            }
        }

        let mut catalog = Self::new();
        catalog.insert("o1", def(&[("sapling", 14), ("embercan", 15)], "forest"));
        catalog.insert(
            "o2",
            def(
                &[("capiblu", 14), ("embercan", 15), ("earthshroud", 13), ("sapling", 13)],
                "sand",
            ),
        );
        catalog.insert(
            "o3",
            def(
                &[("blazewhelp", 14), ("earthshroud", 15), ("capiblu", 13), ("sapling", 13)],
                "sand",
            ),
        );
        catalog.insert(
            "o4",
            def(
                &[
                    ("ignisblast", 25),
                    ("wardensawi", 20),
                    ("earthshroud", 24),
                    ("ararablair", 30),
                ],
                "forest",
            ),
        );
        catalog.insert(
            "o5",
            def(
                &[("ibyracy", 20), ("carcalon", 22), ("apexwing", 24), ("earthshroud", 19)],
                "forest",
            ),
        );
        catalog.insert(
            "o6",
            def(&[("ibyracy", 15), ("ibyracy", 15), ("ibyracy", 15)], "ice"),
        );
        catalog.insert(
            "o7",
            def(
                &[
                    ("ararablair", 25),
                    ("earthshroud", 20),
                    ("ignisblast", 24),
                    ("jatyglow", 30),
                ],
                "ice",
            ),
        );
        catalog.insert(
            "p1",
            def(
                &[
                    ("primalsauim", 25),
                    ("earthshroud", 20),
                    ("ignisblast", 24),
                    ("ararablair", 30),
                ],
                "forest",
            ),
        );
        catalog.insert(
            "w1",
            def(
                &[
                    ("ararablair", 25),
                    ("earthshroud", 20),
                    ("primalsauim", 24),
                    ("ignisblast", 30),
                ],
                "ice",
            ),
        );
        catalog.insert(
            "wx",
            def(
                &[
                    ("ararablair", 25),
                    ("earthshroud", 20),
                    ("primalsauim", 24),
                    ("ignisblast", 30),
                ],
                "ice",
            ),
        );
        catalog.insert(
            "f1",
            def(
                &[("jatyglow", 15), ("embercan", 20), ("earthshroud", 24), ("blazewhelp", 30)],
                "sand",
            ),
        );
        catalog.insert(
            "fx",
            def(
                &[("jatyglow", 15), ("embercan", 20), ("earthshroud", 24), ("blazewhelp", 30)],
                "sand",
            ),
        );
        catalog
    }
}

impl TrainerOracle for TrainerCatalog {
    fn trainer(&self, id: &str) -> Option<&TrainerDef> {
        self.defs.get(id)
    }
}
