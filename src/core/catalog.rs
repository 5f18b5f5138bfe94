//! Built-in capability catalog
//!
//! The catalog is global and append-only in practice. These definitions seed
//! the `capabilities` table; runtime lookups always go through the store.

use super::models::{Capability, CapabilityCategory, CapabilityDefinition, Role};

const DEFAULT_CATALOG: &[CapabilityDefinition] = &[
    // Projects
    CapabilityDefinition {
        key: "projects.view",
        name: "View projects",
        description: "See projects and their details",
        category: CapabilityCategory::Projects,
        min_role_required: Some(Role::ViewOnly),
    },
    CapabilityDefinition {
        key: "projects.create",
        name: "Create projects",
        description: "Create new projects in the organization",
        category: CapabilityCategory::Projects,
        min_role_required: Some(Role::Member),
    },
    CapabilityDefinition {
        key: "projects.edit",
        name: "Edit projects",
        description: "Change project settings and content",
        category: CapabilityCategory::Projects,
        min_role_required: Some(Role::Member),
    },
    CapabilityDefinition {
        key: "projects.delete",
        name: "Delete projects",
        description: "Permanently delete projects",
        category: CapabilityCategory::Projects,
        min_role_required: Some(Role::Admin),
    },
    // Members
    CapabilityDefinition {
        key: "members.view",
        name: "View members",
        description: "See the organization member list",
        category: CapabilityCategory::Members,
        min_role_required: Some(Role::ViewOnly),
    },
    CapabilityDefinition {
        key: "members.invite",
        name: "Invite members",
        description: "Send invitations to join the organization",
        category: CapabilityCategory::Members,
        min_role_required: Some(Role::Admin),
    },
    CapabilityDefinition {
        key: "members.remove",
        name: "Remove members",
        description: "Remove members from the organization",
        category: CapabilityCategory::Members,
        min_role_required: Some(Role::SuperAdmin),
    },
    CapabilityDefinition {
        key: "members.change_role",
        name: "Change member roles",
        description: "Promote or demote organization members",
        category: CapabilityCategory::Members,
        min_role_required: Some(Role::SuperAdmin),
    },
    // Billing
    CapabilityDefinition {
        key: "billing.view",
        name: "View billing",
        description: "See invoices and the current plan",
        category: CapabilityCategory::Billing,
        min_role_required: Some(Role::SuperAdmin),
    },
    CapabilityDefinition {
        key: "billing.manage",
        name: "Manage billing",
        description: "Change the plan and payment methods",
        category: CapabilityCategory::Billing,
        min_role_required: None,
    },
    // Settings
    CapabilityDefinition {
        key: "settings.view",
        name: "View settings",
        description: "See organization settings",
        category: CapabilityCategory::Settings,
        min_role_required: Some(Role::Admin),
    },
    CapabilityDefinition {
        key: "settings.edit",
        name: "Edit settings",
        description: "Change organization settings",
        category: CapabilityCategory::Settings,
        min_role_required: Some(Role::SuperAdmin),
    },
    CapabilityDefinition {
        key: "settings.audit_log",
        name: "View audit log",
        description: "Read the organization audit log",
        category: CapabilityCategory::Settings,
        min_role_required: Some(Role::SuperAdmin),
    },
    // Communications
    CapabilityDefinition {
        key: "email_templates.view",
        name: "View email templates",
        description: "See transactional email templates",
        category: CapabilityCategory::Communications,
        min_role_required: Some(Role::Admin),
    },
    CapabilityDefinition {
        key: "email_templates.edit",
        name: "Edit email templates",
        description: "Change transactional email templates",
        category: CapabilityCategory::Communications,
        min_role_required: Some(Role::SuperAdmin),
    },
];

/// Built-in capability definitions
pub fn default_catalog() -> &'static [CapabilityDefinition] {
    DEFAULT_CATALOG
}

/// Default access policy derived from the role hierarchy.
///
/// A capability without a minimum role is owner-only.
pub fn has_default_access(capability: &Capability, role: Role) -> bool {
    capability.grants_by_default(role)
}
