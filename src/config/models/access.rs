//! Access-control engine configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the resolver, tier gate and customization engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessControlConfig {
    /// Upper bound for one store round trip, in seconds
    #[serde(default = "default_store_timeout")]
    pub store_timeout_secs: u64,
    /// Upper bound for the post-commit session invalidation, in seconds
    #[serde(default = "default_invalidation_timeout")]
    pub invalidation_timeout_secs: u64,
    /// Tier named in upgrade prompts
    #[serde(default = "default_upgrade_tier_name")]
    pub upgrade_tier_name: String,
    /// Tier assumed when an organization has no active subscription
    #[serde(default = "default_free_tier_name")]
    pub free_tier_name: String,
    /// Subscription statuses that count as active
    #[serde(default = "default_active_statuses")]
    pub active_subscription_statuses: Vec<String>,
}

impl Default for AccessControlConfig {
    fn default() -> Self {
        Self {
            store_timeout_secs: default_store_timeout(),
            invalidation_timeout_secs: default_invalidation_timeout(),
            upgrade_tier_name: default_upgrade_tier_name(),
            free_tier_name: default_free_tier_name(),
            active_subscription_statuses: default_active_statuses(),
        }
    }
}

impl AccessControlConfig {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    pub fn invalidation_timeout(&self) -> Duration {
        Duration::from_secs(self.invalidation_timeout_secs)
    }

    /// User-facing message for organizations without the entitlement
    pub fn upgrade_message(&self) -> String {
        format!(
            "Custom role permissions are not available on your current plan. Upgrade to {} tier to customize role capabilities.",
            self.upgrade_tier_name
        )
    }
}
