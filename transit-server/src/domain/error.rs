//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! while populating the catalogue. They are distinct from request/IO errors.

/// Domain-level errors raised while registering stops, buses and distances.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A stop with this name is already registered
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A bus with this name is already registered
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// A bus route or distance references a stop that was never added
    #[error("unknown stop {stop:?} referenced by {referrer}")]
    UnknownStop { stop: String, referrer: String },

    /// Stop coordinates failed validation
    #[error(transparent)]
    InvalidCoordinates(#[from] super::InvalidCoordinates),
}
