//! RBAC system entry point

use super::customization::CustomizationEngine;
use super::outbox::InvalidationOutbox;
use super::resolver::CapabilityResolver;
use super::tier::TierGate;
use super::types::{ActionResult, ApplyOutcome, CapabilityChange, ResetOutcome, RolePreview};
use crate::auth::claims::ActorClaims;
use crate::config::AccessControlConfig;
use crate::core::models::{Role, TierEligibility};
use crate::storage::AccessStores;
use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Role/capability engine wired to a set of stores
#[derive(Clone)]
pub struct RbacSystem {
    resolver: CapabilityResolver,
    tier_gate: TierGate,
    engine: CustomizationEngine,
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(stores: &AccessStores, config: &AccessControlConfig) -> Self {
        info!("Initializing RBAC system");

        let config = Arc::new(config.clone());
        let resolver = CapabilityResolver::new(
            stores.capabilities.clone(),
            stores.overrides.clone(),
            config.store_timeout(),
        );
        let tier_gate = TierGate::new(stores.subscriptions.clone(), config.clone());
        let outbox = InvalidationOutbox::new(stores.sessions.clone(), config.invalidation_timeout());
        let engine = CustomizationEngine::new(
            stores.capabilities.clone(),
            stores.overrides.clone(),
            tier_gate.clone(),
            outbox,
            config,
        );

        Self {
            resolver,
            tier_gate,
            engine,
        }
    }

    pub fn resolver(&self) -> &CapabilityResolver {
        &self.resolver
    }

    pub fn tier_gate(&self) -> &TierGate {
        &self.tier_gate
    }

    pub fn engine(&self) -> &CustomizationEngine {
        &self.engine
    }

    pub async fn get_effective_state(
        &self,
        org_id: Uuid,
        role: Role,
        capability_key: &str,
    ) -> Result<bool> {
        self.resolver
            .get_effective_state(org_id, role, capability_key)
            .await
    }

    pub async fn is_allowed(&self, claims: &ActorClaims, capability_key: &str) -> bool {
        self.resolver.is_allowed(claims, capability_key).await
    }

    pub async fn preview_role(&self, org_id: Uuid, role: Role) -> Result<RolePreview> {
        self.resolver.preview_role(org_id, role).await
    }

    pub async fn effective_capabilities(&self, org_id: Uuid, role: Role) -> Result<BTreeSet<String>> {
        self.resolver.effective_capabilities(org_id, role).await
    }

    pub async fn can_customize(&self, org_id: Uuid) -> Result<TierEligibility> {
        self.tier_gate.can_customize(org_id).await
    }

    pub async fn apply_changes(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
        changes: &[CapabilityChange],
    ) -> ActionResult<ApplyOutcome> {
        self.engine.apply_changes(actor, org_id, role, changes).await
    }

    pub async fn grant(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
        capability_key: &str,
    ) -> ActionResult<ApplyOutcome> {
        self.engine.grant(actor, org_id, role, capability_key).await
    }

    pub async fn revoke(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
        capability_key: &str,
    ) -> ActionResult<ApplyOutcome> {
        self.engine.revoke(actor, org_id, role, capability_key).await
    }

    pub async fn reset_role(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
    ) -> ActionResult<ResetOutcome> {
        self.engine.reset_role(actor, org_id, role).await
    }
}
