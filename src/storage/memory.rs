//! In-process store
//!
//! Implements every store contract on plain maps behind a lock. Used by
//! tests, benchmarks and embedders that keep their data elsewhere.

use crate::core::catalog::default_catalog;
use crate::core::models::{Capability, CapabilityOverride, Role, SubscriptionTier};
use crate::core::traits::{CapabilityStore, OverrideStore, SessionInvalidator, SubscriptionStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

type OverrideKey = (Uuid, Role, Uuid);

#[derive(Debug, Clone)]
struct MemorySubscription {
    tier_id: Uuid,
    status: String,
}

#[derive(Debug, Clone)]
struct MemorySession {
    user_id: Uuid,
    is_active: bool,
}

#[derive(Debug, Default)]
struct MemoryState {
    capabilities: HashMap<String, Capability>,
    overrides: HashMap<OverrideKey, CapabilityOverride>,
    tiers: HashMap<Uuid, SubscriptionTier>,
    subscriptions: HashMap<Uuid, MemorySubscription>,
    members: HashMap<Uuid, HashMap<Uuid, Role>>,
    sessions: HashMap<String, MemorySession>,
}

/// Map-backed implementation of all store traits
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the built-in catalog
    pub fn with_default_catalog() -> Self {
        let store = Self::new();
        for definition in default_catalog() {
            store.add_capability(Capability::from_definition(definition));
        }
        store
    }

    pub fn add_capability(&self, capability: Capability) {
        self.state
            .write()
            .capabilities
            .insert(capability.key.clone(), capability);
    }

    pub fn add_tier(&self, tier: SubscriptionTier) {
        self.state.write().tiers.insert(tier.id, tier);
    }

    /// Attach `org_id` to `tier_id` with the given status, replacing any previous one
    pub fn set_subscription(&self, org_id: Uuid, tier_id: Uuid, status: &str) {
        self.state.write().subscriptions.insert(
            org_id,
            MemorySubscription {
                tier_id,
                status: status.to_string(),
            },
        );
    }

    pub fn add_member(&self, org_id: Uuid, user_id: Uuid, role: Role) {
        self.state
            .write()
            .members
            .entry(org_id)
            .or_default()
            .insert(user_id, role);
    }

    /// Open an active session for `user_id`, returning its ID
    pub fn open_session(&self, user_id: Uuid) -> String {
        let id = Uuid::new_v4().to_string();
        self.state.write().sessions.insert(
            id.clone(),
            MemorySession {
                user_id,
                is_active: true,
            },
        );
        id
    }

    pub fn is_session_active(&self, session_id: &str) -> bool {
        self.state
            .read()
            .sessions
            .get(session_id)
            .is_some_and(|s| s.is_active)
    }

    /// Number of stored override rows, across all organizations
    pub fn override_count(&self) -> usize {
        self.state.read().overrides.len()
    }
}

#[async_trait]
impl CapabilityStore for MemoryStore {
    async fn find_capability_by_key(&self, key: &str) -> Result<Option<Capability>> {
        Ok(self.state.read().capabilities.get(key).cloned())
    }

    async fn find_capabilities_by_keys(&self, keys: &[String]) -> Result<Vec<Capability>> {
        let state = self.state.read();
        Ok(keys
            .iter()
            .filter_map(|key| state.capabilities.get(key).cloned())
            .collect())
    }

    async fn list_capabilities(&self) -> Result<Vec<Capability>> {
        Ok(self.state.read().capabilities.values().cloned().collect())
    }
}

#[async_trait]
impl OverrideStore for MemoryStore {
    async fn find_override(
        &self,
        org_id: Uuid,
        role: Role,
        capability_id: Uuid,
    ) -> Result<Option<CapabilityOverride>> {
        Ok(self
            .state
            .read()
            .overrides
            .get(&(org_id, role, capability_id))
            .cloned())
    }

    async fn list_overrides(&self, org_id: Uuid, role: Role) -> Result<Vec<CapabilityOverride>> {
        Ok(self
            .state
            .read()
            .overrides
            .values()
            .filter(|o| o.org_id == org_id && o.role == role)
            .cloned()
            .collect())
    }

    async fn upsert_overrides(&self, overrides: &[CapabilityOverride]) -> Result<u64> {
        let mut state = self.state.write();
        let mut written = 0;
        for row in overrides {
            let key = (row.org_id, row.role, row.capability_id);
            if state.overrides.get(&key).is_some_and(|o| o.granted == row.granted) {
                continue;
            }
            state.overrides.insert(key, row.clone());
            written += 1;
        }
        Ok(written)
    }

    async fn delete_overrides(&self, org_id: Uuid, role: Role) -> Result<u64> {
        let mut state = self.state.write();
        let before = state.overrides.len();
        state
            .overrides
            .retain(|(org, r, _), _| !(*org == org_id && *r == role));
        Ok((before - state.overrides.len()) as u64)
    }
}

#[async_trait]
impl SubscriptionStore for MemoryStore {
    async fn find_active_tier(
        &self,
        org_id: Uuid,
        active_statuses: &[String],
    ) -> Result<Option<SubscriptionTier>> {
        let state = self.state.read();
        Ok(state
            .subscriptions
            .get(&org_id)
            .filter(|s| active_statuses.iter().any(|status| *status == s.status))
            .and_then(|s| state.tiers.get(&s.tier_id).cloned()))
    }
}

#[async_trait]
impl SessionInvalidator for MemoryStore {
    async fn force_logout_users_by_role(&self, org_id: Uuid, role: Role) -> Result<u64> {
        let mut state = self.state.write();
        let users: Vec<Uuid> = state
            .members
            .get(&org_id)
            .map(|members| {
                members
                    .iter()
                    .filter(|(_, member_role)| **member_role == role)
                    .map(|(user_id, _)| *user_id)
                    .collect()
            })
            .unwrap_or_default();

        let mut affected = 0;
        for session in state.sessions.values_mut() {
            if session.is_active && users.contains(&session.user_id) {
                session.is_active = false;
                affected += 1;
            }
        }
        Ok(affected)
    }
}
