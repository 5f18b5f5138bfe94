//! RBAC type definitions

use crate::core::models::{Capability, Role};
use crate::utils::error::{AccessError, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};
use uuid::Uuid;

/// One requested override change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityChange {
    /// Capability key, e.g. `projects.delete`
    pub capability_key: String,
    /// Desired state
    pub granted: bool,
}

impl CapabilityChange {
    pub fn new(capability_key: impl Into<String>, granted: bool) -> Self {
        Self {
            capability_key: capability_key.into(),
            granted,
        }
    }

    pub fn grant(capability_key: impl Into<String>) -> Self {
        Self::new(capability_key, true)
    }

    pub fn revoke(capability_key: impl Into<String>) -> Self {
        Self::new(capability_key, false)
    }
}

/// Outcome of a batch of override changes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    /// Overrides written (new or changed)
    pub applied_count: usize,
    /// Requested changes that already matched the stored override
    pub unchanged_count: usize,
    /// Requested keys not found in the catalog
    pub skipped_keys: Vec<String>,
    /// Sessions invalidated after the write (0 if invalidation failed)
    pub affected_session_count: u64,
}

/// Outcome of resetting a role to its defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetOutcome {
    /// Overrides removed
    pub removed_count: u64,
    /// Sessions invalidated after the delete (0 if invalidation failed)
    pub affected_session_count: u64,
}

/// Resolved state of one capability for one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityState {
    pub capability: Capability,
    /// State from the role hierarchy alone
    pub default_granted: bool,
    /// Stored override, if any
    pub override_granted: Option<bool>,
    /// State the authorization check will use
    pub effective: bool,
}

impl CapabilityState {
    /// Whether an override changes the outcome relative to the default
    pub fn differs_from_default(&self) -> bool {
        self.effective != self.default_granted
    }
}

/// Every catalog capability resolved for one role in one organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePreview {
    pub org_id: Uuid,
    pub role: Role,
    /// Sorted by category, then key
    pub capabilities: Vec<CapabilityState>,
}

impl RolePreview {
    /// Capabilities grouped by category
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&CapabilityState>> {
        let mut groups: BTreeMap<&str, Vec<&CapabilityState>> = BTreeMap::new();
        for state in &self.capabilities {
            groups
                .entry(state.capability.category.as_str())
                .or_default()
                .push(state);
        }
        groups
    }

    /// Number of capabilities carrying an override
    pub fn customized_count(&self) -> usize {
        self.capabilities
            .iter()
            .filter(|state| state.override_granted.is_some())
            .count()
    }

    pub fn get(&self, key: &str) -> Option<&CapabilityState> {
        self.capabilities.iter().find(|s| s.capability.key == key)
    }
}

/// Result envelope returned by every public engine operation.
///
/// Failures never surface as `Err`: callers render `message` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub success: bool,
    /// User-facing message
    pub message: String,
    /// Failure discriminant
    pub error: Option<ErrorKind>,
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
            data: Some(data),
        }
    }

    /// Failure envelope. Raw infrastructure detail is logged, not returned.
    pub fn failed(err: &AccessError) -> Self {
        if err.is_infrastructure() {
            error!(error = %err, kind = ?err.kind(), "operation failed");
        } else {
            info!(reason = %err, kind = ?err.kind(), "operation rejected");
        }

        Self {
            success: false,
            message: err.user_message(),
            error: Some(err.kind()),
            data: None,
        }
    }

    /// Translate an internal result, building the success message from the data
    pub fn from_result(result: Result<T>, message: impl FnOnce(&T) -> String) -> Self {
        match result {
            Ok(data) => {
                let text = message(&data);
                Self::ok(data, text)
            }
            Err(err) => Self::failed(&err),
        }
    }
}
