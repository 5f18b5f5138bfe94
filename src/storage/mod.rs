//! Storage layer
//!
//! Backends for the store traits: a SeaORM database and an in-process store.

/// Database storage module
pub mod database;
/// In-process storage module
pub mod memory;

use crate::config::StorageConfig;
use crate::core::traits::{CapabilityStore, OverrideStore, SessionInvalidator, SubscriptionStore};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

pub use memory::MemoryStore;

/// Handles to every store the access-control system needs
#[derive(Clone)]
pub struct AccessStores {
    pub capabilities: Arc<dyn CapabilityStore>,
    pub overrides: Arc<dyn OverrideStore>,
    pub subscriptions: Arc<dyn SubscriptionStore>,
    pub sessions: Arc<dyn SessionInvalidator>,
}

impl AccessStores {
    /// Use one backend for all four stores
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: CapabilityStore + OverrideStore + SubscriptionStore + SessionInvalidator + 'static,
    {
        Self {
            capabilities: backend.clone(),
            overrides: backend.clone(),
            subscriptions: backend.clone(),
            sessions: backend,
        }
    }

    /// Connect to the configured database, run migrations and seed the catalog
    pub async fn connect(config: &StorageConfig) -> Result<(Self, Arc<database::Database>)> {
        info!("Initializing storage layer");
        let database = Arc::new(database::Database::new(&config.database).await?);
        database.migrate().await?;
        database.seed_catalog().await?;
        info!("Storage layer initialized successfully");
        Ok((Self::from_backend(database.clone()), database))
    }
}

impl std::fmt::Debug for AccessStores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessStores").finish_non_exhaustive()
    }
}
