use crate::core::models::{CapabilityOverride, Role};
use crate::core::traits::OverrideStore;
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, OnConflict};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, org_role_capability};
use super::types::SeaOrmDatabase;

#[async_trait]
impl OverrideStore for SeaOrmDatabase {
    async fn find_override(
        &self,
        org_id: Uuid,
        role: Role,
        capability_id: Uuid,
    ) -> Result<Option<CapabilityOverride>> {
        let model = entities::OrgRoleCapability::find()
            .filter(org_role_capability::Column::OrgId.eq(org_id))
            .filter(org_role_capability::Column::Role.eq(role.as_str()))
            .filter(org_role_capability::Column::CapabilityId.eq(capability_id))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        model.map(|m| m.to_domain()).transpose()
    }

    async fn list_overrides(&self, org_id: Uuid, role: Role) -> Result<Vec<CapabilityOverride>> {
        entities::OrgRoleCapability::find()
            .filter(org_role_capability::Column::OrgId.eq(org_id))
            .filter(org_role_capability::Column::Role.eq(role.as_str()))
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?
            .iter()
            .map(org_role_capability::Model::to_domain)
            .collect()
    }

    async fn upsert_overrides(&self, overrides: &[CapabilityOverride]) -> Result<u64> {
        if overrides.is_empty() {
            return Ok(0);
        }
        debug!("Upserting {} capability overrides", overrides.len());

        // One statement, so the batch commits or fails as a whole. Rows whose
        // stored flag already matches are left alone and not counted.
        entities::OrgRoleCapability::insert_many(
            overrides.iter().map(org_role_capability::Model::from_domain),
        )
        .on_conflict(
            OnConflict::columns([
                org_role_capability::Column::OrgId,
                org_role_capability::Column::Role,
                org_role_capability::Column::CapabilityId,
            ])
            .update_columns([
                org_role_capability::Column::Granted,
                org_role_capability::Column::UpdatedBy,
                org_role_capability::Column::UpdatedAt,
            ])
            .action_and_where(
                Expr::col((
                    entities::OrgRoleCapability,
                    org_role_capability::Column::Granted,
                ))
                .ne(Expr::col((
                    Alias::new("excluded"),
                    org_role_capability::Column::Granted,
                ))),
            )
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(AccessError::Database)
    }

    async fn delete_overrides(&self, org_id: Uuid, role: Role) -> Result<u64> {
        let result = entities::OrgRoleCapability::delete_many()
            .filter(org_role_capability::Column::OrgId.eq(org_id))
            .filter(org_role_capability::Column::Role.eq(role.as_str()))
            .exec(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(result.rows_affected)
    }
}
