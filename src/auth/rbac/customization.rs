//! Capability customization
//!
//! Owners customize the capabilities of non-owner roles in their
//! organization. Every write path runs the same precondition chain, in order,
//! before touching the store:
//!
//! 1. an authenticated actor
//! 2. the actor is an owner of the target organization
//! 3. the target role is not `owner`
//! 4. the tier gate allows customization (writes only, not resets)
//! 5. at least one change maps to a known capability
//!
//! Resolved changes go to the store as one conditional upsert. Rows that
//! already hold the requested value are left untouched and reported as
//! unchanged.
//!
//! After a successful write only sessions of the affected role are
//! invalidated, through the [`InvalidationOutbox`].

use super::helpers::{bounded, persistence_failure};
use super::outbox::{InvalidationOutbox, InvalidationReason, PendingInvalidation};
use super::tier::TierGate;
use super::types::{ActionResult, ApplyOutcome, CapabilityChange, ResetOutcome};
use crate::auth::claims::ActorClaims;
use crate::config::AccessControlConfig;
use crate::core::models::{Capability, CapabilityOverride, Role};
use crate::core::traits::{CapabilityStore, OverrideStore};
use crate::utils::error::{AccessError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Applies, resets and toggles capability overrides
#[derive(Clone)]
pub struct CustomizationEngine {
    capabilities: Arc<dyn CapabilityStore>,
    overrides: Arc<dyn OverrideStore>,
    tier_gate: TierGate,
    outbox: InvalidationOutbox,
    config: Arc<AccessControlConfig>,
}

impl CustomizationEngine {
    pub fn new(
        capabilities: Arc<dyn CapabilityStore>,
        overrides: Arc<dyn OverrideStore>,
        tier_gate: TierGate,
        outbox: InvalidationOutbox,
        config: Arc<AccessControlConfig>,
    ) -> Self {
        Self {
            capabilities,
            overrides,
            tier_gate,
            outbox,
            config,
        }
    }

    /// Apply a batch of override changes for `role` in `org_id`
    pub async fn apply_changes(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
        changes: &[CapabilityChange],
    ) -> ActionResult<ApplyOutcome> {
        let result = self.try_apply_changes(actor, org_id, role, changes).await;
        ActionResult::from_result(result, |outcome| apply_message(role, outcome))
    }

    /// Grant one capability to `role`
    pub async fn grant(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
        capability_key: &str,
    ) -> ActionResult<ApplyOutcome> {
        self.apply_changes(actor, org_id, role, &[CapabilityChange::grant(capability_key)])
            .await
    }

    /// Revoke one capability from `role`
    pub async fn revoke(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
        capability_key: &str,
    ) -> ActionResult<ApplyOutcome> {
        self.apply_changes(actor, org_id, role, &[CapabilityChange::revoke(capability_key)])
            .await
    }

    /// Remove every override for `role`, restoring hierarchy defaults
    pub async fn reset_role(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
    ) -> ActionResult<ResetOutcome> {
        let result = self.try_reset_role(actor, org_id, role).await;
        ActionResult::from_result(result, |outcome| {
            if outcome.removed_count == 0 {
                format!("The {} role already uses the default capabilities", role)
            } else {
                format!(
                    "Reset the {} role to default capabilities ({} customizations removed)",
                    role, outcome.removed_count
                )
            }
        })
    }

    /// Batch apply returning the internal error type
    #[instrument(skip(self, actor, changes), fields(change_count = changes.len()))]
    pub async fn try_apply_changes(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
        changes: &[CapabilityChange],
    ) -> Result<ApplyOutcome> {
        let actor = authorize(actor, org_id, role)?;
        self.tier_gate.require_customization(org_id).await?;

        if changes.is_empty() {
            return Err(AccessError::validation("No changes provided"));
        }

        let requested = dedupe_changes(changes);
        let keys: Vec<String> = requested.iter().map(|(key, _)| key.clone()).collect();
        let found = bounded(
            self.config.store_timeout(),
            "find_capabilities_by_keys",
            self.capabilities.find_capabilities_by_keys(&keys),
        )
        .await?;
        let by_key: HashMap<&str, &Capability> =
            found.iter().map(|c| (c.key.as_str(), c)).collect();

        let mut skipped_keys = Vec::new();
        let mut resolved: Vec<(&Capability, bool)> = Vec::with_capacity(requested.len());
        for (key, granted) in &requested {
            match by_key.get(key.as_str()) {
                Some(capability) => resolved.push((*capability, *granted)),
                None => {
                    warn!(capability = %key, "Skipping unknown capability");
                    skipped_keys.push(key.clone());
                }
            }
        }

        if resolved.is_empty() {
            return Err(AccessError::validation("No valid changes to apply"));
        }

        let rows: Vec<CapabilityOverride> = resolved
            .iter()
            .map(|(capability, granted)| {
                CapabilityOverride::new(org_id, role, capability.id, *granted, actor.user_id)
            })
            .collect();

        // Rows already holding the requested value are neither written nor counted
        let written = bounded(
            self.config.store_timeout(),
            "upsert_overrides",
            self.overrides.upsert_overrides(&rows),
        )
        .await
        .map_err(|e| persistence_failure("upsert_overrides", e))?;
        let applied_count = usize::try_from(written).unwrap_or(rows.len()).min(rows.len());

        let mut outcome = ApplyOutcome {
            applied_count,
            unchanged_count: rows.len() - applied_count,
            skipped_keys,
            affected_session_count: 0,
        };

        if applied_count == 0 {
            info!(%org_id, %role, unchanged = outcome.unchanged_count, "Capability changes already applied");
            return Ok(outcome);
        }

        info!(
            %org_id,
            %role,
            updated_by = %actor.user_id,
            applied = outcome.applied_count,
            unchanged = outcome.unchanged_count,
            skipped = outcome.skipped_keys.len(),
            "Applied capability overrides"
        );

        let report = self
            .outbox
            .dispatch(PendingInvalidation {
                org_id,
                role,
                reason: InvalidationReason::CapabilitiesChanged,
            })
            .await;
        outcome.affected_session_count = report.affected_sessions;

        Ok(outcome)
    }

    /// Reset returning the internal error type. Not tier gated.
    #[instrument(skip(self, actor))]
    pub async fn try_reset_role(
        &self,
        actor: Option<&ActorClaims>,
        org_id: Uuid,
        role: Role,
    ) -> Result<ResetOutcome> {
        let actor = authorize(actor, org_id, role)?;

        let removed_count = bounded(
            self.config.store_timeout(),
            "delete_overrides",
            self.overrides.delete_overrides(org_id, role),
        )
        .await
        .map_err(|e| persistence_failure("delete_overrides", e))?;

        let mut outcome = ResetOutcome {
            removed_count,
            affected_session_count: 0,
        };
        if removed_count == 0 {
            return Ok(outcome);
        }

        info!(%org_id, %role, reset_by = %actor.user_id, removed_count, "Reset role capabilities");

        let report = self
            .outbox
            .dispatch(PendingInvalidation {
                org_id,
                role,
                reason: InvalidationReason::RoleReset,
            })
            .await;
        outcome.affected_session_count = report.affected_sessions;

        Ok(outcome)
    }
}

/// Preconditions 1 to 3, shared by every write path
fn authorize(actor: Option<&ActorClaims>, org_id: Uuid, role: Role) -> Result<&ActorClaims> {
    let actor = actor.ok_or(AccessError::AuthenticationRequired)?;

    if actor.role != Role::Owner {
        return Err(AccessError::authorization(
            "Only organization owners can customize role capabilities",
        ));
    }

    if !actor.belongs_to(org_id) {
        return Err(AccessError::authorization(
            "You can only customize roles in your own organization",
        ));
    }

    if !role.is_customizable() {
        return Err(AccessError::authorization(
            "The owner role always has every capability and cannot be customized",
        ));
    }

    Ok(actor)
}

/// Collapse repeated keys, keeping the last requested state and first-seen order
fn dedupe_changes(changes: &[CapabilityChange]) -> Vec<(String, bool)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut requested: Vec<(String, bool)> = Vec::with_capacity(changes.len());

    for change in changes {
        let key = change.capability_key.trim();
        match positions.get(key) {
            Some(&index) => requested[index].1 = change.granted,
            None => {
                positions.insert(key, requested.len());
                requested.push((key.to_string(), change.granted));
            }
        }
    }

    requested
}

fn apply_message(role: Role, outcome: &ApplyOutcome) -> String {
    let mut message = if outcome.applied_count == 0 {
        format!("No changes needed: the {} role already matches", role)
    } else {
        format!(
            "Updated {} capabilit{} for the {} role",
            outcome.applied_count,
            if outcome.applied_count == 1 { "y" } else { "ies" },
            role
        )
    };
    if !outcome.skipped_keys.is_empty() {
        message.push_str(&format!(
            " ({} unknown capabilit{} skipped)",
            outcome.skipped_keys.len(),
            if outcome.skipped_keys.len() == 1 { "y" } else { "ies" }
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_keeps_last_state_in_first_seen_order() {
        let changes = vec![
            CapabilityChange::grant("projects.delete"),
            CapabilityChange::grant("members.invite"),
            CapabilityChange::revoke("projects.delete"),
        ];
        assert_eq!(
            dedupe_changes(&changes),
            vec![
                ("projects.delete".to_string(), false),
                ("members.invite".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_authorize_order() {
        let org_id = Uuid::new_v4();
        let owner = ActorClaims::new(Uuid::new_v4(), "o@example.com", org_id, Role::Owner);
        let admin = ActorClaims::new(Uuid::new_v4(), "a@example.com", org_id, Role::Admin);

        assert!(matches!(
            authorize(None, org_id, Role::Owner),
            Err(AccessError::AuthenticationRequired)
        ));
        assert!(matches!(
            authorize(Some(&admin), org_id, Role::Member),
            Err(AccessError::AuthorizationDenied(_))
        ));
        assert!(matches!(
            authorize(Some(&owner), Uuid::new_v4(), Role::Member),
            Err(AccessError::AuthorizationDenied(_))
        ));
        assert!(matches!(
            authorize(Some(&owner), org_id, Role::Owner),
            Err(AccessError::AuthorizationDenied(_))
        ));
        assert!(authorize(Some(&owner), org_id, Role::SuperAdmin).is_ok());
    }

    #[test]
    fn test_apply_message() {
        let outcome = ApplyOutcome {
            applied_count: 1,
            skipped_keys: vec!["nope".to_string()],
            ..Default::default()
        };
        assert_eq!(
            apply_message(Role::Member, &outcome),
            "Updated 1 capability for the member role (1 unknown capability skipped)"
        );

        let outcome = ApplyOutcome {
            unchanged_count: 2,
            ..Default::default()
        };
        assert_eq!(
            apply_message(Role::Admin, &outcome),
            "No changes needed: the admin role already matches"
        );
    }
}
