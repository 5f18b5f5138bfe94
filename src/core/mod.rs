//! Core domain
//!
//! Role hierarchy, capability catalog and the store contracts.

pub mod catalog;
pub mod models;
pub mod traits;

pub use catalog::{default_catalog, has_default_access};
