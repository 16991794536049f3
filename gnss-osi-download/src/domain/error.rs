//! Domain error types.
//!
//! These errors represent invalid user input for a search. They are
//! distinct from portal/HTTP errors.

use super::station::InvalidStationId;

/// Domain-level errors for validating search parameters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Station identifier failed validation
    #[error(transparent)]
    InvalidStation(#[from] InvalidStationId),

    /// Hour is not an integer
    #[error("invalid hour {0:?}: expected an integer")]
    InvalidHour(String),
}
