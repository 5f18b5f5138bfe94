//! Capability resolution
//!
//! Effective state for (org, role, capability) is the stored override if one
//! exists, otherwise the hierarchy default. Owners always hold everything.

use super::helpers::bounded;
use super::types::{CapabilityState, RolePreview};
use crate::auth::claims::ActorClaims;
use crate::core::catalog::has_default_access;
use crate::core::models::{Capability, Role};
use crate::core::traits::{CapabilityStore, OverrideStore};
use crate::utils::error::{AccessError, Result};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Resolve one capability for one role given its override, if any
pub fn effective_state(capability: &Capability, role: Role, override_granted: Option<bool>) -> bool {
    if !role.is_customizable() {
        return true;
    }
    override_granted.unwrap_or_else(|| has_default_access(capability, role))
}

/// Read-only resolver backed by the catalog and override stores
#[derive(Clone)]
pub struct CapabilityResolver {
    capabilities: Arc<dyn CapabilityStore>,
    overrides: Arc<dyn OverrideStore>,
    timeout: Duration,
}

impl CapabilityResolver {
    pub fn new(
        capabilities: Arc<dyn CapabilityStore>,
        overrides: Arc<dyn OverrideStore>,
        timeout: Duration,
    ) -> Self {
        Self {
            capabilities,
            overrides,
            timeout,
        }
    }

    /// Effective state of `capability_key` for `role` in `org_id`.
    ///
    /// Unknown keys are reported as `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_effective_state(
        &self,
        org_id: Uuid,
        role: Role,
        capability_key: &str,
    ) -> Result<bool> {
        let capability = bounded(
            self.timeout,
            "find_capability_by_key",
            self.capabilities.find_capability_by_key(capability_key),
        )
        .await?
        .ok_or_else(|| AccessError::not_found(format!("Unknown capability: {}", capability_key)))?;

        if !role.is_customizable() {
            return Ok(true);
        }

        let stored = bounded(
            self.timeout,
            "find_override",
            self.overrides.find_override(org_id, role, capability.id),
        )
        .await?;

        let state = effective_state(&capability, role, stored.map(|o| o.granted));
        debug!(effective = state, "Resolved capability");
        Ok(state)
    }

    /// Fail-closed check for request paths: unknown keys and store errors deny
    pub async fn is_allowed(&self, claims: &ActorClaims, capability_key: &str) -> bool {
        match self
            .get_effective_state(claims.org_id, claims.role, capability_key)
            .await
        {
            Ok(granted) => granted,
            Err(e) => {
                warn!(
                    user_id = %claims.user_id,
                    capability = capability_key,
                    error = %e,
                    "Capability check failed closed"
                );
                false
            }
        }
    }

    /// Every catalog capability resolved for `role`, using one override read
    #[instrument(skip(self))]
    pub async fn preview_role(&self, org_id: Uuid, role: Role) -> Result<RolePreview> {
        let catalog = bounded(
            self.timeout,
            "list_capabilities",
            self.capabilities.list_capabilities(),
        )
        .await?;

        let overrides: HashMap<Uuid, bool> = if role.is_customizable() {
            bounded(
                self.timeout,
                "list_overrides",
                self.overrides.list_overrides(org_id, role),
            )
            .await?
            .into_iter()
            .map(|o| (o.capability_id, o.granted))
            .collect()
        } else {
            HashMap::new()
        };

        let mut capabilities: Vec<CapabilityState> = catalog
            .into_iter()
            .map(|capability| {
                let override_granted = overrides.get(&capability.id).copied();
                CapabilityState {
                    default_granted: has_default_access(&capability, role),
                    effective: effective_state(&capability, role, override_granted),
                    override_granted,
                    capability,
                }
            })
            .collect();
        capabilities.sort_by(|a, b| {
            a.capability
                .category
                .cmp(&b.capability.category)
                .then_with(|| a.capability.key.cmp(&b.capability.key))
        });

        Ok(RolePreview {
            org_id,
            role,
            capabilities,
        })
    }

    /// Keys of every capability `role` effectively holds in `org_id`
    pub async fn effective_capabilities(&self, org_id: Uuid, role: Role) -> Result<BTreeSet<String>> {
        let preview = self.preview_role(org_id, role).await?;
        Ok(preview
            .capabilities
            .into_iter()
            .filter(|state| state.effective)
            .map(|state| state.capability.key)
            .collect())
    }
}
