//! Content factory for building catalogs from a data directory.

use std::path::{Path, PathBuf};

use battle_core::BattleConfig;

use crate::catalogs::{AbilityCatalog, SpeciesCatalog, TrainerCatalog};
use crate::loaders::{AbilityLoader, ConfigLoader, LoadResult, SpeciesLoader, TrainerLoader};

/// Loads all battle content from one data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── species.ron
/// ├── abilities.ron
/// └── trainers.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle tuning from `battle.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("battle.toml"))
    }

    /// Load the species catalog from `species.ron`.
    pub fn load_species(&self) -> LoadResult<SpeciesCatalog> {
        SpeciesLoader::load(&self.data_dir.join("species.ron"))
    }

    /// Load the ability table from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<AbilityCatalog> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load trainer rosters from `trainers.ron`.
    pub fn load_trainers(&self) -> LoadResult<TrainerCatalog> {
        TrainerLoader::load(&self.data_dir.join("trainers.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_full_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("battle.toml"), "xp_per_level = 120.0\n").unwrap();
        std::fs::write(
            dir.path().join("species.ron"),
            r#"(
                species: {
                    "embercan": (
                        element: fire,
                        stats: (
                            max_health: 60.0,
                            max_energy: 50.0,
                            attack: 50.0,
                            defense: 40.0,
                            recovery: 1.0,
                            speed: 60.0,
                        ),
                        abilities: [(0, "scratch")],
                    ),
                },
            )"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("abilities.ron"),
            r#"(
                abilities: {
                    "scratch": (
                        target: opposing,
                        amount: 1.2,
                        cost: 20.0,
                        element: normal,
                        animation: "scratch",
                    ),
                },
            )"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("trainers.ron"),
            r#"(
                trainers: {
                    "o1": (roster: [("embercan", 15)], biome: "forest"),
                },
            )"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().xp_per_level, 120.0);
        assert_eq!(factory.load_species().unwrap().len(), 1);
        assert_eq!(factory.load_abilities().unwrap().len(), 1);
        assert_eq!(factory.load_trainers().unwrap().len(), 1);
    }
}
