//! Runtime error types.

use battle_core::env::OracleError;
use battle_core::session::SessionError;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("no trainer registered under id '{0}'")]
    UnknownTrainer(String),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
