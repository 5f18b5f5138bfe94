use crate::core::models::SubscriptionTier;
use crate::core::traits::SubscriptionStore;
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use sea_orm::*;
use uuid::Uuid;

use super::super::entities::{self, subscription, subscription_tier};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Create the tier, or update its customization flag if the name exists
    pub async fn upsert_tier(&self, name: &str, allows_custom_permissions: bool) -> Result<SubscriptionTier> {
        let existing = entities::SubscriptionTier::find()
            .filter(subscription_tier::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        let model = match existing {
            Some(model) => {
                let mut active: subscription_tier::ActiveModel = model.into();
                active.allows_custom_permissions = Set(allows_custom_permissions);
                active.update(&self.db).await.map_err(AccessError::Database)?
            }
            None => subscription_tier::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(name.to_string()),
                allows_custom_permissions: Set(allows_custom_permissions),
            }
            .insert(&self.db)
            .await
            .map_err(AccessError::Database)?,
        };

        Ok(model.to_domain())
    }

    /// Replace the organization's subscription
    pub async fn set_subscription(&self, org_id: Uuid, tier_id: Uuid, status: &str) -> Result<()> {
        let txn = self.db.begin().await.map_err(AccessError::Database)?;

        entities::Subscription::delete_many()
            .filter(subscription::Column::OrgId.eq(org_id))
            .exec(&txn)
            .await
            .map_err(AccessError::Database)?;

        subscription::ActiveModel {
            id: Set(Uuid::new_v4()),
            org_id: Set(org_id),
            tier_id: Set(tier_id),
            status: Set(status.to_string()),
            updated_at: Set(chrono::Utc::now().into()),
        }
        .insert(&txn)
        .await
        .map_err(AccessError::Database)?;

        txn.commit().await.map_err(AccessError::Database)
    }
}

#[async_trait]
impl SubscriptionStore for SeaOrmDatabase {
    async fn find_active_tier(
        &self,
        org_id: Uuid,
        active_statuses: &[String],
    ) -> Result<Option<SubscriptionTier>> {
        let row = entities::Subscription::find()
            .filter(subscription::Column::OrgId.eq(org_id))
            .filter(subscription::Column::Status.is_in(active_statuses.iter().cloned()))
            .order_by_desc(subscription::Column::UpdatedAt)
            .find_also_related(entities::SubscriptionTier)
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(row.and_then(|(_, tier)| tier).map(|tier| tier.to_domain()))
    }
}
