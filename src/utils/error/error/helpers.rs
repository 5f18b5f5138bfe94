//! Helper functions for creating specific error types

use super::types::AccessError;

/// Helper functions for creating specific errors
impl AccessError {
    pub fn authorization<S: Into<String>>(message: S) -> Self {
        Self::AuthorizationDenied(message.into())
    }

    pub fn tier_not_eligible<T: Into<String>, S: Into<String>>(tier: T, message: S) -> Self {
        Self::TierNotEligible {
            tier: tier.into(),
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::ValidationFailed(message.into())
    }

    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::PersistenceFailed(message.into())
    }

    pub fn invalidation<S: Into<String>>(message: S) -> Self {
        Self::InvalidationFailed(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }
}
