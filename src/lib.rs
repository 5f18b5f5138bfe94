//! # tenant-rbac
//!
//! Role hierarchy and per-organization capability overrides for multi-tenant
//! applications.
//!
//! - Five fixed roles: `view-only < member < admin < superadmin < owner`
//! - Default capability access derived from each capability's minimum role
//! - Owner-managed overrides per (organization, role, capability)
//! - Customization gated on the organization's subscription tier
//! - Forced logout of the affected role after every effective change
//!
//! ```rust,no_run
//! use tenant_rbac::{
//!     ActorClaims, CapabilityChange, Config, RbacSystem, Role, storage::AccessStores,
//! };
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/rbac.yaml").await?;
//!     let (stores, _db) = AccessStores::connect(&config.service.storage).await?;
//!     let rbac = RbacSystem::new(&stores, &config.service.access);
//!
//!     let org_id = Uuid::new_v4();
//!     let owner = ActorClaims::new(Uuid::new_v4(), "owner@example.com", org_id, Role::Owner);
//!     let result = rbac
//!         .apply_changes(
//!             Some(&owner),
//!             org_id,
//!             Role::Member,
//!             &[CapabilityChange::grant("projects.delete")],
//!         )
//!         .await;
//!     println!("{}", result.message);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

pub use auth::claims::{ActorClaims, RawClaims};
pub use auth::rbac::{
    ActionResult, ApplyOutcome, CapabilityChange, CapabilityResolver, CustomizationEngine,
    RbacSystem, ResetOutcome, RolePreview, TierGate,
};
pub use config::Config;
pub use core::models::{Capability, CapabilityOverride, Role, SubscriptionTier, TierEligibility};
pub use utils::error::{AccessError, ErrorKind, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
