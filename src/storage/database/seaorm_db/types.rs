use sea_orm::DatabaseConnection;

/// SeaORM-based implementation of the store traits
#[derive(Debug)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Result of seeding the built-in catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Definitions written by this run
    pub inserted: usize,
    /// Definitions whose key was already present
    pub existing: usize,
}
