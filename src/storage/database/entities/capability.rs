use crate::core::models::{self, Role};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Capability catalog database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "capabilities")]
pub struct Model {
    /// Capability ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Stable unique key
    #[sea_orm(unique)]
    pub key: String,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub category: String,

    /// Lowest role granted by default; NULL means owner-only
    pub min_role_required: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Overrides referencing this capability
    #[sea_orm(has_many = "super::org_role_capability::Entity")]
    Overrides,
}

impl Related<super::org_role_capability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Overrides.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain type. Unrecognised minimum roles become owner-only.
    pub fn to_domain(&self) -> models::Capability {
        models::Capability {
            id: self.id,
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            min_role_required: self.min_role_required.as_deref().and_then(Role::parse),
        }
    }

    /// Build an insertable model from the domain type
    pub fn from_domain(capability: &models::Capability) -> ActiveModel {
        ActiveModel {
            id: sea_orm::Set(capability.id),
            key: sea_orm::Set(capability.key.clone()),
            name: sea_orm::Set(capability.name.clone()),
            description: sea_orm::Set(capability.description.clone()),
            category: sea_orm::Set(capability.category.clone()),
            min_role_required: sea_orm::Set(
                capability.min_role_required.map(|role| role.as_str().to_string()),
            ),
            created_at: sea_orm::Set(chrono::Utc::now().into()),
        }
    }
}
