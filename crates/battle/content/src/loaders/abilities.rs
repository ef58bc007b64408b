//! Ability table loader.

use std::collections::BTreeMap;
use std::path::Path;

use battle_core::env::{AbilityDef, AbilityKey};
use serde::{Deserialize, Serialize};

use crate::catalogs::AbilityCatalog;
use crate::loaders::{LoadResult, read_file};

/// Ability table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityFile {
    pub abilities: BTreeMap<AbilityKey, AbilityDef>,
}

/// Loader for the ability table from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load an ability table from a RON file.
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        let file: AbilityFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability table RON: {}", e))?;

        Ok(file.abilities.into_iter().collect())
    }
}
