//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid credential or session state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("{name} not set")]
    MissingSetting { name: &'static str },
}
