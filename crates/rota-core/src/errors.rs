//! Engine errors.

use thiserror::Error;

/// Roster operation error.
///
/// Every variant leaves the roster untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Reviewer '{0}' is not registered")]
    NotRegistered(String),

    #[error("Reviewer '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Reviewer '{0}' is already available")]
    AlreadyAvailable(String),

    #[error("Reviewer '{0}' is already busy")]
    AlreadyBusy(String),

    #[error("Reviewer '{0}' is already suspended")]
    AlreadySuspended(String),

    #[error("Reviewer '{0}' is not suspended and cannot be resumed")]
    NotSuspendedCannotResume(String),

    #[error("Reviewer '{0}' is suspended and cannot be made busy")]
    SuspendedCannotBeBusy(String),

    #[error("Reviewer '{0}' is suspended and must be resumed instead")]
    SuspendedCannotBeAvailable(String),

    #[error("No reviewer available")]
    NoReviewerAvailable,

    #[error("Reviewer list is missing")]
    NullArgument,

    #[error("Reviewer list is empty")]
    EmptyArgument,
}

/// Scope-level error, raised by [`crate::RosterService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Roster error: {source}")]
    RosterError { source: RosterError },

    #[error("Store error: {source}")]
    StoreError {
        source: rota_store_interface::StoreError,
    },

    #[error("Roster of scope '{scope}' kept changing, gave up after {attempts} attempts")]
    ConflictRetriesExhausted { scope: String, attempts: u32 },
}

impl From<RosterError> for ServiceError {
    fn from(e: RosterError) -> Self {
        Self::RosterError { source: e }
    }
}

impl From<rota_store_interface::StoreError> for ServiceError {
    fn from(e: rota_store_interface::StoreError) -> Self {
        Self::StoreError { source: e }
    }
}

/// Result alias for `RosterError`.
pub type Result<T, E = RosterError> = core::result::Result<T, E>;
