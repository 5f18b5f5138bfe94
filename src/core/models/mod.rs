//! Domain models
//!
//! This module defines the data structures shared by the resolver, the tier
//! gate and the customization engine.

pub mod capability;
pub mod override_rule;
pub mod role;
pub mod subscription;

pub use capability::{Capability, CapabilityCategory, CapabilityDefinition};
pub use override_rule::CapabilityOverride;
pub use role::{ROLE_HIERARCHY, Role, UnknownRole};
pub use subscription::{SubscriptionTier, TierEligibility};
