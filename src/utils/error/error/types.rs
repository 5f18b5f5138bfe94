//! Error type definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AccessError>;

/// Generic message shown to end users for infrastructure failures
pub(super) const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while saving your changes. Please try again in a moment.";

/// Main error type
#[derive(Error, Debug)]
pub enum AccessError {
    /// No authenticated actor
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Actor role insufficient, or the target role is not customizable
    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    /// Subscription tier lacks the customization entitlement
    #[error("Tier not eligible ({tier}): {message}")]
    TierNotEligible { tier: String, message: String },

    /// Empty or unmapped change set, malformed input
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Store write error
    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),

    /// Session invalidation error, never surfaced to callers of the engine
    #[error("Session invalidation failed: {0}")]
    InvalidationFailed(String),

    /// Missing entity
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable error discriminant returned to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AuthenticationRequired,
    AuthorizationDenied,
    TierNotEligible,
    ValidationFailed,
    PersistenceFailed,
    InvalidationFailed,
    NotFound,
    Internal,
}

impl AccessError {
    /// Discriminant for result envelopes
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::AuthenticationRequired => ErrorKind::AuthenticationRequired,
            AccessError::AuthorizationDenied(_) => ErrorKind::AuthorizationDenied,
            AccessError::TierNotEligible { .. } => ErrorKind::TierNotEligible,
            AccessError::ValidationFailed(_) => ErrorKind::ValidationFailed,
            AccessError::PersistenceFailed(_)
            | AccessError::Database(_)
            | AccessError::Timeout(_) => ErrorKind::PersistenceFailed,
            AccessError::InvalidationFailed(_) => ErrorKind::InvalidationFailed,
            AccessError::NotFound(_) => ErrorKind::NotFound,
            AccessError::Config(_)
            | AccessError::Serialization(_)
            | AccessError::Yaml(_)
            | AccessError::Io(_) => ErrorKind::Internal,
        }
    }

    /// Whether the error comes from infrastructure rather than the request
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::PersistenceFailed | ErrorKind::InvalidationFailed | ErrorKind::Internal
        )
    }

    /// Message safe to show to an end user.
    ///
    /// Infrastructure failures collapse to one generic message; the raw
    /// detail only reaches the logs.
    pub fn user_message(&self) -> String {
        match self {
            AccessError::AuthenticationRequired => {
                "You must be signed in to manage role capabilities.".to_string()
            }
            AccessError::AuthorizationDenied(message)
            | AccessError::ValidationFailed(message)
            | AccessError::NotFound(message) => message.clone(),
            AccessError::TierNotEligible { message, .. } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
