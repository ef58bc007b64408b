//! Species catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use battle_core::env::{SpeciesDef, SpeciesKey};
use serde::{Deserialize, Serialize};

use crate::catalogs::SpeciesCatalog;
use crate::loaders::{LoadResult, read_file};

/// Species catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesFile {
    pub species: BTreeMap<SpeciesKey, SpeciesDef>,
}

/// Loader for the species catalog from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load a species catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<SpeciesCatalog> {
        let content = read_file(path)?;
        let file: SpeciesFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species catalog RON: {}", e))?;

        Ok(file.species.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::Element;

    #[test]
    fn parses_a_species_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("species.ron");
        std::fs::write(
            &path,
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
                        abilities: [(0, "scratch"), (5, "burn")],
                        evolution: Some((into: "blazewhelp", at_level: 16)),
                    ),
                    "jatyglow": (
                        element: bug,
                        stats: (
                            max_health: 80.0,
                            max_energy: 80.0,
                            attack: 80.0,
                            defense: 60.0,
                            recovery: 1.0,
                            speed: 100.0,
                        ),
                        abilities: [(0, "scratch")],
                    ),
                },
            )"#,
        )
        .unwrap();

        let catalog = SpeciesLoader::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        let embercan = catalog.get(&SpeciesKey::new("embercan")).unwrap();
        assert_eq!(embercan.element, Element::Fire);
        assert_eq!(embercan.evolution.as_ref().unwrap().at_level, 16);
        // `evolution` may be omitted entirely.
        let jatyglow = catalog.get(&SpeciesKey::new("jatyglow")).unwrap();
        assert!(jatyglow.evolution.is_none());
    }

    #[test]
    fn accepts_the_legacy_plant_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("species.ron");
        std::fs::write(
            &path,
            r#"(
                species: {
                    "sapling": (
                        element: plant,
                        stats: (
                            max_health: 70.0,
                            max_energy: 60.0,
                            attack: 45.0,
                            defense: 50.0,
                            recovery: 1.0,
                            speed: 70.0,
                        ),
                        abilities: [(0, "scratch")],
                    ),
                },
            )"#,
        )
        .unwrap();

        let catalog = SpeciesLoader::load(&path).unwrap();
        let sapling = catalog.get(&SpeciesKey::new("sapling")).unwrap();
        assert_eq!(sapling.element, Element::Grass);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpeciesLoader::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(err.to_string().contains("nope.ron"));
    }
}
