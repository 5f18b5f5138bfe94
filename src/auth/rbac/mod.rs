//! Role-Based Access Control (RBAC) engine
//!
//! Resolves effective capabilities from the role hierarchy and
//! per-organization overrides, gates customization on the subscription tier,
//! and applies override changes with selective session invalidation.

mod customization;
mod helpers;
mod outbox;
mod resolver;
mod system;
mod tier;
mod types;

// Re-export public types and structs
pub use customization::CustomizationEngine;
pub use outbox::{InvalidationOutbox, InvalidationReason, InvalidationReport, PendingInvalidation};
pub use resolver::{CapabilityResolver, effective_state};
pub use system::RbacSystem;
pub use tier::TierGate;
pub use types::{
    ActionResult, ApplyOutcome, CapabilityChange, CapabilityState, ResetOutcome, RolePreview,
};
