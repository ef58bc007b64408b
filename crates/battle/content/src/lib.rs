//! Static battle content and data-file loaders.
//!
//! This crate houses the species, ability, and trainer catalogs that back
//! the `battle-core` oracles, plus loaders for overriding them from data
//! files:
//! - Species catalog (data-driven via RON)
//! - Ability tables (data-driven via RON)
//! - Trainer rosters (data-driven via RON)
//! - Battle tuning configuration (data-driven via TOML)
//!
//! Content is consumed through the oracle traits and never appears in
//! battle state. The [`catalogs`] module also ships the builtin bestiary so
//! hosts without data files can start a battle out of the box.

pub mod catalogs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalogs::{AbilityCatalog, SpeciesCatalog, TrainerCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, BattleConfigFile, ConfigLoader, ContentFactory, SpeciesLoader, TrainerLoader,
};
