//! Access-control and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

/// Longest timeout accepted for a single round trip
const MAX_TIMEOUT_SECS: u64 = 60;

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        self.storage.validate()?;
        self.access.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Validate for AccessControlConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access-control configuration");

        if self.store_timeout_secs == 0 || self.store_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(format!(
                "Store timeout must be between 1 and {} seconds",
                MAX_TIMEOUT_SECS
            ));
        }

        if self.invalidation_timeout_secs == 0 || self.invalidation_timeout_secs > MAX_TIMEOUT_SECS
        {
            return Err(format!(
                "Invalidation timeout must be between 1 and {} seconds",
                MAX_TIMEOUT_SECS
            ));
        }

        if self.upgrade_tier_name.trim().is_empty() {
            return Err("Upgrade tier name cannot be empty".to_string());
        }

        if self.free_tier_name.trim().is_empty() {
            return Err("Free tier name cannot be empty".to_string());
        }

        if self
            .active_subscription_statuses
            .iter()
            .all(|status| status.trim().is_empty())
        {
            return Err("At least one active subscription status is required".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
