use crate::core::models::{CapabilityOverride, Role};
use crate::utils::error::AccessError;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Capability override database model, unique per (org_id, role, capability_id)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "org_role_capabilities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub org_id: Uuid,

    /// Role wire name
    pub role: String,

    pub capability_id: Uuid,

    pub granted: bool,

    /// Last writer
    pub updated_by: Uuid,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::capability::Entity",
        from = "Column::CapabilityId",
        to = "super::capability::Column::Id"
    )]
    Capability,
}

impl Related<super::capability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Capability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> crate::utils::error::Result<CapabilityOverride> {
        let role = Role::parse(&self.role).ok_or_else(|| {
            AccessError::persistence(format!("Stored override has unknown role: {}", self.role))
        })?;
        Ok(CapabilityOverride {
            org_id: self.org_id,
            role,
            capability_id: self.capability_id,
            granted: self.granted,
            updated_by: self.updated_by,
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }

    pub fn from_domain(row: &CapabilityOverride) -> ActiveModel {
        ActiveModel {
            id: sea_orm::Set(Uuid::new_v4()),
            org_id: sea_orm::Set(row.org_id),
            role: sea_orm::Set(row.role.as_str().to_string()),
            capability_id: sea_orm::Set(row.capability_id),
            granted: sea_orm::Set(row.granted),
            updated_by: sea_orm::Set(row.updated_by),
            updated_at: sea_orm::Set(row.updated_at.into()),
        }
    }
}
