use crate::core::models::Role;
use crate::core::traits::SessionInvalidator;
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::{debug, info};
use uuid::Uuid;

use super::super::entities::{self, organization_member, user_session};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Set a user's role in an organization
    pub async fn add_member(&self, org_id: Uuid, user_id: Uuid, role: Role) -> Result<()> {
        let txn = self.db.begin().await.map_err(AccessError::Database)?;

        entities::OrganizationMember::delete_many()
            .filter(organization_member::Column::OrgId.eq(org_id))
            .filter(organization_member::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(AccessError::Database)?;

        organization_member::ActiveModel {
            id: Set(Uuid::new_v4()),
            org_id: Set(org_id),
            user_id: Set(user_id),
            role: Set(role.as_str().to_string()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await
        .map_err(AccessError::Database)?;

        txn.commit().await.map_err(AccessError::Database)
    }

    /// Role a user holds in an organization, if they are a member
    pub async fn member_role(&self, org_id: Uuid, user_id: Uuid) -> Result<Option<Role>> {
        let member = entities::OrganizationMember::find()
            .filter(organization_member::Column::OrgId.eq(org_id))
            .filter(organization_member::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        member
            .map(|m| {
                Role::parse(&m.role).ok_or_else(|| {
                    AccessError::persistence(format!("Stored member has unknown role: {}", m.role))
                })
            })
            .transpose()
    }

    /// Open a session for the user; returns the session ID
    pub async fn open_session(&self, user_id: Uuid, ttl: chrono::Duration) -> Result<String> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();

        user_session::ActiveModel {
            id: Set(id.clone()),
            user_id: Set(user_id),
            expires_at: Set((now + ttl).into()),
            created_at: Set(now.into()),
            last_accessed_at: Set(now.into()),
            is_active: Set(true),
        }
        .insert(&self.db)
        .await
        .map_err(AccessError::Database)?;

        Ok(id)
    }

    pub async fn is_session_active(&self, session_id: &str) -> Result<bool> {
        let session = entities::UserSession::find_by_id(session_id.to_string())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(session.is_some_and(|s| s.is_active))
    }
}

#[async_trait]
impl SessionInvalidator for SeaOrmDatabase {
    async fn force_logout_users_by_role(&self, org_id: Uuid, role: Role) -> Result<u64> {
        let user_ids: Vec<Uuid> = entities::OrganizationMember::find()
            .select_only()
            .column(organization_member::Column::UserId)
            .filter(organization_member::Column::OrgId.eq(org_id))
            .filter(organization_member::Column::Role.eq(role.as_str()))
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        if user_ids.is_empty() {
            debug!("No members hold role {} in org {}", role, org_id);
            return Ok(0);
        }

        let result = entities::UserSession::update_many()
            .col_expr(user_session::Column::IsActive, Expr::value(false))
            .filter(user_session::Column::UserId.is_in(user_ids))
            .filter(user_session::Column::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(AccessError::Database)?;

        info!(
            org_id = %org_id,
            role = %role,
            sessions = result.rows_affected,
            "Forced logout of role members"
        );
        Ok(result.rows_affected)
    }
}
