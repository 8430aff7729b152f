//! Client errors

use livedom_tree::DomError;
use livedom_vdom::VdomError;

/// Client error
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Reconciliation failed: {0}")]
    Vdom(#[from] VdomError),

    #[error("Host error: {0}")]
    Dom(#[from] DomError),

    #[error("Invalid message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No element with identifier {0:?}")]
    UnknownIdentifier(String),

    #[error("Message channel closed")]
    ChannelClosed,
}

impl ClientError {
    /// Errors that leave the live tree in an unknown state.
    ///
    /// A rejected snapshot or a bad message is dropped; a failed host
    /// mutation or a desynchronized tree is not recoverable.
    pub fn is_fatal(&self) -> bool {
        match self {
            ClientError::Vdom(VdomError::MalformedNode { .. }) => false,
            ClientError::Vdom(_) | ClientError::Dom(_) | ClientError::ChannelClosed => true,
            ClientError::Json(_) | ClientError::UnknownIdentifier(_) => false,
        }
    }
}
