//! Reconciliation errors

use livedom_tree::DomError;

/// Result type for reconciliation
pub type VdomResult<T> = Result<T, VdomError>;

/// Reconciliation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VdomError {
    /// Snapshot violates the node model; raised before any host mutation
    #[error("Malformed node at {path}: {reason}")]
    MalformedNode { path: String, reason: String },

    /// The live tree has no child where the previous snapshot has one
    #[error("Live tree out of sync: no live child to patch")]
    LiveTreeOutOfSync,

    /// Host mutation failed
    #[error("Host error: {0}")]
    Host(#[from] DomError),
}

impl VdomError {
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        VdomError::MalformedNode {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
