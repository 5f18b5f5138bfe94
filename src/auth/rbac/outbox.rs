//! Post-commit session invalidation
//!
//! Override writes commit first. The follow-up logout of the affected role is
//! queued as a [`PendingInvalidation`] and dispatched afterwards; its failure
//! is reported on its own channel and never unwinds the committed write.

use super::helpers::bounded;
use crate::core::models::Role;
use crate::core::traits::SessionInvalidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// Why sessions are being invalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidationReason {
    CapabilitiesChanged,
    RoleReset,
}

impl fmt::Display for InvalidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidationReason::CapabilitiesChanged => f.write_str("capabilities changed"),
            InvalidationReason::RoleReset => f.write_str("role reset"),
        }
    }
}

/// Follow-up recorded after a committed write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInvalidation {
    pub org_id: Uuid,
    /// Only holders of this role are logged out
    pub role: Role,
    pub reason: InvalidationReason,
}

/// Result of dispatching a [`PendingInvalidation`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidationReport {
    /// Sessions invalidated, 0 on failure
    pub affected_sessions: u64,
    /// Failure detail for operators
    pub error: Option<String>,
}

/// Dispatches selective forced logouts with a bounded wait
#[derive(Clone)]
pub struct InvalidationOutbox {
    invalidator: Arc<dyn SessionInvalidator>,
    timeout: Duration,
}

impl InvalidationOutbox {
    pub fn new(invalidator: Arc<dyn SessionInvalidator>, timeout: Duration) -> Self {
        Self {
            invalidator,
            timeout,
        }
    }

    /// Run the follow-up. Never fails; errors are logged and reported.
    pub async fn dispatch(&self, pending: PendingInvalidation) -> InvalidationReport {
        let call = self
            .invalidator
            .force_logout_users_by_role(pending.org_id, pending.role);

        match bounded(self.timeout, "force_logout_users_by_role", call).await {
            Ok(affected_sessions) => {
                info!(
                    org_id = %pending.org_id,
                    role = %pending.role,
                    reason = %pending.reason,
                    affected_sessions,
                    "Invalidated sessions for role"
                );
                InvalidationReport {
                    affected_sessions,
                    error: None,
                }
            }
            Err(e) => {
                warn!(
                    org_id = %pending.org_id,
                    role = %pending.role,
                    reason = %pending.reason,
                    error = %e,
                    "Session invalidation failed; committed changes are kept"
                );
                InvalidationReport {
                    affected_sessions: 0,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

impl fmt::Debug for InvalidationOutbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidationOutbox")
            .field("timeout", &self.timeout)
            .finish()
    }
}
