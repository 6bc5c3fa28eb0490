//! Error types for the synchronization controller.

use slugsync_extract::HostError;
use slugsync_types::FieldName;
use thiserror::Error;

/// Why an update did not complete. Reported inside an `UpdateResult`,
/// never returned as `Err` across the controller boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// The target (or source) element could not be resolved.
    #[error("field not found: {field}")]
    FieldNotFound { field: FieldName },

    /// Another update on the same controller is still running.
    #[error("update already in progress")]
    ConcurrentUpdateRejected,

    /// Extraction or write-back failed unexpectedly.
    #[error("transform failed: {0}")]
    TransformFailure(String),
}

impl From<HostError> for UpdateError {
    fn from(err: HostError) -> Self {
        Self::TransformFailure(err.to_string())
    }
}
