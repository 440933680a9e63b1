use thiserror::Error;

/// Store error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    /// The roster was saved by someone else since it was loaded.
    #[error("Version conflict on scope '{scope}': expected version {expected}, found {actual}")]
    VersionConflict {
        scope: String,
        expected: u64,
        actual: u64,
    },

    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `StoreError`.
pub type Result<T, E = StoreError> = core::result::Result<T, E>;
