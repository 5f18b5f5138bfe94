//! Per-organization capability overrides

use super::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Explicit grant or deny of one capability for one role in one organization.
///
/// Unique per `(org_id, role, capability_id)`; always wins over the
/// hierarchy default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityOverride {
    /// Organization ID
    pub org_id: Uuid,
    /// Role the override applies to
    pub role: Role,
    /// Capability ID
    pub capability_id: Uuid,
    /// Whether the capability is granted
    pub granted: bool,
    /// Last writer
    pub updated_by: Uuid,
    /// Last write timestamp
    pub updated_at: DateTime<Utc>,
}

impl CapabilityOverride {
    pub fn new(org_id: Uuid, role: Role, capability_id: Uuid, granted: bool, updated_by: Uuid) -> Self {
        Self {
            org_id,
            role,
            capability_id,
            granted,
            updated_by,
            updated_at: Utc::now(),
        }
    }
}
