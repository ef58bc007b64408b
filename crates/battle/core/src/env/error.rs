//! Oracle lookup failures.

use super::abilities::AbilityKey;
use super::species::SpeciesKey;

/// An unknown content key. These are fatal misconfigurations: they abort
/// battle setup with a descriptive message instead of crashing mid-battle
/// into undefined state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("unknown species '{0}'")]
    UnknownSpecies(SpeciesKey),

    #[error("unknown ability '{0}'")]
    UnknownAbility(AbilityKey),

    #[error("unknown trainer '{0}'")]
    UnknownTrainer(String),
}
