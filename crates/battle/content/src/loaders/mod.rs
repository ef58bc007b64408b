//! Loaders for reading battle content from data files.
//!
//! Each loader converts a RON or TOML file into the corresponding catalog
//! from [`crate::catalogs`] (or a [`battle_core::BattleConfig`]). Use
//! [`ContentFactory`] to load a whole data directory.

pub mod abilities;
pub mod config;
pub mod factory;
pub mod species;
pub mod trainers;

pub use abilities::AbilityLoader;
pub use config::{BattleConfigFile, ConfigLoader};
pub use factory::ContentFactory;
pub use species::SpeciesLoader;
pub use trainers::TrainerLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
