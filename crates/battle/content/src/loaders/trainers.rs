//! Trainer roster loader.

use std::collections::BTreeMap;
use std::path::Path;

use battle_core::env::TrainerDef;
use serde::{Deserialize, Serialize};

use crate::catalogs::TrainerCatalog;
use crate::loaders::{LoadResult, read_file};

/// Trainer roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerFile {
    pub trainers: BTreeMap<String, TrainerDef>,
}

/// Loader for trainer rosters from RON files.
pub struct TrainerLoader;

impl TrainerLoader {
    /// Load a trainer catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<TrainerCatalog> {
        let content = read_file(path)?;
        let file: TrainerFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trainer roster RON: {}", e))?;

        let mut catalog = TrainerCatalog::new();
        for (id, def) in file.trainers {
            catalog.insert(id, def);
        }
        Ok(catalog)
    }
}
