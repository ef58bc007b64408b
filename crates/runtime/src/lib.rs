//! Host-side orchestration around the battle engine.
//!
//! `battle-core` resolves a single battle; this crate wires battles into a
//! running game. It builds encounters from trainer rosters and wild spawn
//! points, drives a session frame by frame with structured logging, and
//! performs the between-battle roster maintenance (healing, evolutions,
//! marking trainers defeated).
//!
//! Modules are organized by responsibility:
//! - [`driver`] hosts the per-battle frame loop wrapper
//! - [`encounter`] builds opponent parties and tracks defeated trainers
//! - [`roster`] maintains the player party between battles

pub mod driver;
pub mod encounter;
pub mod error;
pub mod roster;

pub use driver::BattleDriver;
pub use encounter::{TrainerEncounter, TrainerLedger, WildSpawn, trainer_encounter, wild_party};
pub use error::{Result, RuntimeError};
pub use roster::{EvolutionReport, check_evolutions, heal_party};
