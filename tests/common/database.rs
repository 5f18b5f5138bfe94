//! Test database utilities
//!
//! Each test gets an isolated, migrated and seeded in-memory SQLite database.

use std::sync::Arc;
use tenant_rbac::config::{AccessControlConfig, DatabaseConfig};
use tenant_rbac::storage::AccessStores;
use tenant_rbac::storage::database::Database;
use tenant_rbac::RbacSystem;

/// In-memory SQLite instance
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Migrated database with the built-in catalog seeded
    pub async fn new() -> Self {
        let db = Self::empty().await;
        db.inner
            .seed_catalog()
            .await
            .expect("Failed to seed capability catalog");
        db
    }

    /// Migrated database with no rows
    pub async fn empty() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            // In-memory SQLite is per connection
            max_connections: 1,
            connection_timeout: 5,
        };

        let db = Database::new(&config)
            .await
            .expect("Failed to create in-memory test database");
        db.migrate().await.expect("Failed to run migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner
    }


    pub fn stores(&self) -> AccessStores {
        AccessStores::from_backend(self.inner.clone())
    }

    /// RBAC system over this database with default settings
    pub fn system(&self) -> RbacSystem {
        RbacSystem::new(&self.stores(), &AccessControlConfig::default())
    }
}
