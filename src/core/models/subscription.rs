//! Subscription tier models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subscription tier definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    /// Tier ID
    pub id: Uuid,
    /// Tier name, e.g. `free` or `business`
    pub name: String,
    /// Whether organizations on this tier may customize role capabilities
    pub allows_custom_permissions: bool,
}

/// Result of the tier gate for one organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEligibility {
    /// Whether capability customization is allowed
    pub allowed: bool,
    /// Name of the tier the decision was based on
    pub tier_name: String,
}
