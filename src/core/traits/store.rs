//! Store trait definitions
//!
//! Collaborator contracts for the relational store and the session
//! invalidation RPC. The engine only talks to these traits.

use crate::core::models::{Capability, CapabilityOverride, Role, SubscriptionTier};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to the global capability catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CapabilityStore: Send + Sync {
    /// Point select by key
    async fn find_capability_by_key(&self, key: &str) -> Result<Option<Capability>>;

    /// Batch select-in on keys. Unknown keys are simply absent from the result.
    async fn find_capabilities_by_keys(&self, keys: &[String]) -> Result<Vec<Capability>>;

    /// Whole catalog
    async fn list_capabilities(&self) -> Result<Vec<Capability>>;
}

/// Per-organization capability overrides
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OverrideStore: Send + Sync {
    /// Override for one (org, role, capability)
    async fn find_override(
        &self,
        org_id: Uuid,
        role: Role,
        capability_id: Uuid,
    ) -> Result<Option<CapabilityOverride>>;

    /// Every override for (org, role) in one read
    async fn list_overrides(&self, org_id: Uuid, role: Role) -> Result<Vec<CapabilityOverride>>;

    /// Insert or update all rows keyed on (org_id, role, capability_id) as one
    /// atomic write. Existing rows whose `granted` already matches are left
    /// untouched. Returns the number of rows inserted or flipped.
    async fn upsert_overrides(&self, overrides: &[CapabilityOverride]) -> Result<u64>;

    /// Remove every override for (org, role). Returns the number removed.
    async fn delete_overrides(&self, org_id: Uuid, role: Role) -> Result<u64>;
}

/// Subscription lookups for the tier gate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Tier of the organization's subscription whose status is one of
    /// `active_statuses`, if any
    async fn find_active_tier(
        &self,
        org_id: Uuid,
        active_statuses: &[String],
    ) -> Result<Option<SubscriptionTier>>;
}

/// Session invalidation RPC
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionInvalidator: Send + Sync {
    /// Invalidate active sessions of users holding `role` in `org_id`.
    /// Returns the number of sessions invalidated.
    async fn force_logout_users_by_role(&self, org_id: Uuid, role: Role) -> Result<u64>;
}
