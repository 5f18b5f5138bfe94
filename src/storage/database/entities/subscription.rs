use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Organization subscription database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub org_id: Uuid,

    pub tier_id: Uuid,

    /// Billing status, e.g. `active`, `trialing`, `canceled`
    pub status: String,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subscription_tier::Entity",
        from = "Column::TierId",
        to = "super::subscription_tier::Column::Id"
    )]
    Tier,
}

impl Related<super::subscription_tier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
