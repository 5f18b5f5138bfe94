use crate::core::catalog::default_catalog;
use crate::core::models::Capability;
use crate::core::traits::CapabilityStore;
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use sea_orm::*;
use std::collections::HashSet;
use tracing::{debug, info};

use super::super::entities::{self, capability};
use super::types::{SeaOrmDatabase, SeedReport};

impl SeaOrmDatabase {
    /// Insert built-in catalog entries whose key is not present yet.
    /// Existing rows are left untouched.
    pub async fn seed_catalog(&self) -> Result<SeedReport> {
        let existing: HashSet<String> = entities::Capability::find()
            .select_only()
            .column(capability::Column::Key)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?
            .into_iter()
            .collect();

        let missing: Vec<capability::ActiveModel> = default_catalog()
            .iter()
            .filter(|definition| !existing.contains(definition.key))
            .map(|definition| capability::Model::from_domain(&Capability::from_definition(definition)))
            .collect();

        let report = SeedReport {
            inserted: missing.len(),
            existing: default_catalog().len() - missing.len(),
        };

        if !missing.is_empty() {
            entities::Capability::insert_many(missing)
                .exec_without_returning(&self.db)
                .await
                .map_err(AccessError::Database)?;
        }

        info!(
            inserted = report.inserted,
            existing = report.existing,
            "Capability catalog seeded"
        );
        Ok(report)
    }
}

#[async_trait]
impl CapabilityStore for SeaOrmDatabase {
    async fn find_capability_by_key(&self, key: &str) -> Result<Option<Capability>> {
        debug!("Finding capability by key: {}", key);

        let model = entities::Capability::find()
            .filter(capability::Column::Key.eq(key))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_capabilities_by_keys(&self, keys: &[String]) -> Result<Vec<Capability>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let models = entities::Capability::find()
            .filter(capability::Column::Key.is_in(keys.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(models.iter().map(capability::Model::to_domain).collect())
    }

    async fn list_capabilities(&self) -> Result<Vec<Capability>> {
        let models = entities::Capability::find()
            .order_by_asc(capability::Column::Category)
            .order_by_asc(capability::Column::Key)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(models.iter().map(capability::Model::to_domain).collect())
    }
}
