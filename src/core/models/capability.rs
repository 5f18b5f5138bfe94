//! Capability catalog models

use super::role::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capability stored in the global catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Capability ID
    pub id: Uuid,
    /// Stable unique key, e.g. `projects.delete`
    pub key: String,
    /// Human readable name
    pub name: String,
    /// Description shown in role managers
    pub description: String,
    /// Grouping category
    pub category: String,
    /// Lowest role granted this capability by default.
    ///
    /// `None` (or an unrecognised value in storage) means owner-only.
    pub min_role_required: Option<Role>,
}

impl Capability {
    /// Build a catalog entry from a static definition
    pub fn from_definition(definition: &CapabilityDefinition) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: definition.key.to_string(),
            name: definition.name.to_string(),
            description: definition.description.to_string(),
            category: definition.category.as_str().to_string(),
            min_role_required: definition.min_role_required,
        }
    }

    /// Whether `role` holds this capability when no override exists
    pub fn grants_by_default(&self, role: Role) -> bool {
        let required = self.min_role_required.unwrap_or(Role::Owner);
        role.meets_minimum(required)
    }
}

/// Capability categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityCategory {
    Projects,
    Members,
    Billing,
    Settings,
    Communications,
}

impl CapabilityCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            CapabilityCategory::Projects => "projects",
            CapabilityCategory::Members => "members",
            CapabilityCategory::Billing => "billing",
            CapabilityCategory::Settings => "settings",
            CapabilityCategory::Communications => "communications",
        }
    }
}

/// Static capability definition used to seed the catalog
#[derive(Debug, Clone, Copy)]
pub struct CapabilityDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: CapabilityCategory,
    pub min_role_required: Option<Role>,
}
