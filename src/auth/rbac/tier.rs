//! Subscription tier gate

use super::helpers::bounded;
use crate::config::AccessControlConfig;
use crate::core::models::TierEligibility;
use crate::core::traits::SubscriptionStore;
use crate::utils::error::{AccessError, Result};
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Decides whether an organization's plan permits capability customization.
///
/// Only writes are gated. Reads of effective state ignore the tier, so a
/// downgrade keeps existing overrides enforced but blocks new ones.
#[derive(Clone)]
pub struct TierGate {
    subscriptions: Arc<dyn SubscriptionStore>,
    config: Arc<AccessControlConfig>,
}

impl TierGate {
    pub fn new(subscriptions: Arc<dyn SubscriptionStore>, config: Arc<AccessControlConfig>) -> Self {
        Self {
            subscriptions,
            config,
        }
    }

    /// Look up the organization's active tier.
    ///
    /// No active subscription resolves to the free tier, not an error.
    #[instrument(skip(self))]
    pub async fn can_customize(&self, org_id: Uuid) -> Result<TierEligibility> {
        let lookup = self
            .subscriptions
            .find_active_tier(org_id, &self.config.active_subscription_statuses);
        let tier = bounded(self.config.store_timeout(), "find_active_tier", lookup).await?;

        let eligibility = match tier {
            Some(tier) => TierEligibility {
                allowed: tier.allows_custom_permissions,
                tier_name: tier.name,
            },
            None => TierEligibility {
                allowed: false,
                tier_name: self.config.free_tier_name.clone(),
            },
        };

        debug!(
            allowed = eligibility.allowed,
            tier = %eligibility.tier_name,
            "Resolved tier eligibility"
        );
        Ok(eligibility)
    }

    /// Like [`can_customize`](Self::can_customize) but rejects ineligible tiers
    pub async fn require_customization(&self, org_id: Uuid) -> Result<TierEligibility> {
        let eligibility = self.can_customize(org_id).await?;
        if !eligibility.allowed {
            return Err(AccessError::tier_not_eligible(
                eligibility.tier_name,
                self.config.upgrade_message(),
            ));
        }
        Ok(eligibility)
    }
}
