//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod access;
pub mod logging;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use access::*;
pub use logging::*;
pub use service::*;
pub use storage::*;

/// Default store round-trip timeout in seconds
pub fn default_store_timeout() -> u64 {
    5
}

/// Default session invalidation timeout in seconds
pub fn default_invalidation_timeout() -> u64 {
    5
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_upgrade_tier_name() -> String {
    "Business".to_string()
}

pub fn default_free_tier_name() -> String {
    "free".to_string()
}

pub fn default_active_statuses() -> Vec<String> {
    vec!["active".to_string(), "trialing".to_string()]
}

pub fn default_log_level() -> String {
    "info".to_string()
}
