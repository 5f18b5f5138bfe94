use sea_orm_migration::prelude::*;

mod m20240101_000001_create_capabilities_table;
mod m20240101_000002_create_org_role_capabilities_table;
mod m20240101_000003_create_subscription_tables;
mod m20240101_000004_create_member_session_tables;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_capabilities_table::Migration),
            Box::new(m20240101_000002_create_org_role_capabilities_table::Migration),
            Box::new(m20240101_000003_create_subscription_tables::Migration),
            Box::new(m20240101_000004_create_member_session_tables::Migration),
        ]
    }
}
