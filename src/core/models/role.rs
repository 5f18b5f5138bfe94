//! Tenant role hierarchy
//!
//! Roles form a closed, totally ordered set fixed at build time:
//! `view-only < member < admin < superadmin < owner`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Organization role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Read-only access
    #[serde(rename = "view-only")]
    ViewOnly,
    /// Regular member
    #[serde(rename = "member")]
    Member,
    /// Organization administrator
    #[serde(rename = "admin")]
    Admin,
    /// Administrator with elevated rights
    #[serde(rename = "superadmin")]
    SuperAdmin,
    /// Organization owner, never customizable
    #[serde(rename = "owner")]
    Owner,
}

/// All roles in ascending rank order
pub const ROLE_HIERARCHY: [Role; 5] = [
    Role::ViewOnly,
    Role::Member,
    Role::Admin,
    Role::SuperAdmin,
    Role::Owner,
];

impl Role {
    /// Position of the role in [`ROLE_HIERARCHY`]
    pub const fn rank(self) -> usize {
        match self {
            Role::ViewOnly => 0,
            Role::Member => 1,
            Role::Admin => 2,
            Role::SuperAdmin => 3,
            Role::Owner => 4,
        }
    }

    /// Wire name of the role
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::ViewOnly => "view-only",
            Role::Member => "member",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
            Role::Owner => "owner",
        }
    }

    /// Parse a role name, returning `None` for anything outside the hierarchy
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        ROLE_HIERARCHY
            .iter()
            .copied()
            .find(|role| role.as_str() == normalized)
    }

    /// Whether this role ranks at or above `required`
    pub const fn meets_minimum(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    /// Whether this role clears the floor set by `allowed`.
    ///
    /// The allowed roles act as a minimum, not an exact-match set: any role at
    /// or above the lowest listed role qualifies. An empty set grants nothing.
    pub fn has_access(self, allowed: &[Role]) -> bool {
        allowed
            .iter()
            .map(|role| role.rank())
            .min()
            .is_some_and(|floor| self.rank() >= floor)
    }

    /// Whether overrides may be written for this role
    pub const fn is_customizable(self) -> bool {
        !matches!(self, Role::Owner)
    }

    /// Roles whose capabilities can be customized, in rank order
    pub fn customizable() -> impl Iterator<Item = Role> {
        ROLE_HIERARCHY.into_iter().filter(|role| role.is_customizable())
    }
}

/// Rank of a role name; unknown names have no rank
pub fn rank_of(role: &str) -> Option<usize> {
    Role::parse(role).map(Role::rank)
}

/// String-level minimum-rank check. Unknown actor or required roles deny.
pub fn meets_minimum(actor_role: &str, required_role: &str) -> bool {
    match (Role::parse(actor_role), Role::parse(required_role)) {
        (Some(actor), Some(required)) => actor.meets_minimum(required),
        _ => false,
    }
}

/// String-level floor check.
///
/// An unknown actor role ranks below everything and is denied. Unknown entries
/// in `allowed` are ignored so they can never lower the floor.
pub fn has_access(actor_role: &str, allowed_roles: &[&str]) -> bool {
    let Some(actor) = Role::parse(actor_role) else {
        return false;
    };
    let allowed: Vec<Role> = allowed_roles
        .iter()
        .filter_map(|name| Role::parse(name))
        .collect();
    actor.has_access(&allowed)
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not part of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}
