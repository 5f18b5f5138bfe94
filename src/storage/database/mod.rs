//! Database storage implementation using SeaORM
//!
//! Works against PostgreSQL in production and SQLite for local runs and tests.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, SeedReport};
