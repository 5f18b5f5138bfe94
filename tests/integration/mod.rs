//! Integration tests for tenant-rbac
//!
//! These run the engine against a real in-memory SQLite database.

pub mod config_validation_tests;
pub mod customization_tests;
pub mod database_tests;
pub mod resolver_tests;
