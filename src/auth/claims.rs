//! Session claims
//!
//! The identity provider hands over a loosely-typed payload. It is validated
//! once here into [`ActorClaims`]; business logic never sees the raw form.

use crate::core::models::Role;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims as delivered by the identity provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawClaims {
    /// Subject (user ID)
    #[serde(default)]
    pub sub: Option<String>,
    /// User email
    #[serde(default)]
    pub email: Option<String>,
    /// Active organization
    #[serde(default)]
    pub org_id: Option<String>,
    /// Role within the active organization
    #[serde(default)]
    pub role: Option<String>,
}

/// Validated claims of the current actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorClaims {
    /// User ID
    pub user_id: Uuid,
    /// User email
    pub email: String,
    /// Organization the session is scoped to
    pub org_id: Uuid,
    /// Role within that organization
    pub role: Role,
}

impl ActorClaims {
    pub fn new(user_id: Uuid, email: impl Into<String>, org_id: Uuid, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            org_id,
            role,
        }
    }

    /// Validate a JSON claims payload
    pub fn from_json(payload: &serde_json::Value) -> Result<Self> {
        let raw: RawClaims = serde_json::from_value(payload.clone())?;
        Self::try_from(raw)
    }

    /// Whether the actor's session is scoped to `org_id`
    pub fn belongs_to(&self, org_id: Uuid) -> bool {
        self.org_id == org_id
    }
}

impl TryFrom<RawClaims> for ActorClaims {
    type Error = AccessError;

    fn try_from(raw: RawClaims) -> Result<Self> {
        let user_id = raw
            .sub
            .as_deref()
            .and_then(|sub| Uuid::parse_str(sub.trim()).ok())
            .ok_or(AccessError::AuthenticationRequired)?;

        let email = raw
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| AccessError::validation("Session is missing an email address"))?;

        let org_id = raw
            .org_id
            .as_deref()
            .and_then(|org| Uuid::parse_str(org.trim()).ok())
            .ok_or_else(|| AccessError::authorization("Session is not scoped to an organization"))?;

        let role = raw
            .role
            .as_deref()
            .and_then(Role::parse)
            .ok_or_else(|| AccessError::authorization("Session role is missing or unknown"))?;

        Ok(Self {
            user_id,
            email,
            org_id,
            role,
        })
    }
}
