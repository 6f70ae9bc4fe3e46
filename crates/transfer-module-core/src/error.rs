//! Error types for transfer module operations

use crate::Identity;
use thiserror::Error;

/// Result type alias for transfer module operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while gating or forwarding a transfer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ============ Authorization Errors ============
    /// Caller is not the current owner
    #[error("Unauthorized: caller {caller} is not the owner ({owner})")]
    Unauthorized { caller: Identity, owner: Identity },

    /// Attempted to install the zero address as owner
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    // ============ Custodial Account Errors ============
    /// The custodial account rejected or reverted the forwarded request
    #[error("External call to {account} failed: {reason}")]
    ExternalCallFailed { account: Identity, reason: String },

    // ============ Configuration Errors ============
    /// Invalid module configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ============ Serialization Errors ============
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl Error {
    /// Check whether this error came from the owner gate
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }

    /// Check whether this error came from the custodial account
    pub fn is_external(&self) -> bool {
        matches!(self, Error::ExternalCallFailed { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::Deserialization(e.to_string())
    }
}
