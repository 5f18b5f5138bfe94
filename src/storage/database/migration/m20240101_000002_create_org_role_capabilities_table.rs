use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrgRoleCapabilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrgRoleCapabilities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrgRoleCapabilities::OrgId).uuid().not_null())
                    .col(ColumnDef::new(OrgRoleCapabilities::Role).string().not_null())
                    .col(
                        ColumnDef::new(OrgRoleCapabilities::CapabilityId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrgRoleCapabilities::Granted)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrgRoleCapabilities::UpdatedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrgRoleCapabilities::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_role_capabilities_capability_id")
                            .from(OrgRoleCapabilities::Table, OrgRoleCapabilities::CapabilityId)
                            .to(Capabilities::Table, Capabilities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upserts conflict on this triple
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_org_role_capabilities_unique")
                    .table(OrgRoleCapabilities::Table)
                    .col(OrgRoleCapabilities::OrgId)
                    .col(OrgRoleCapabilities::Role)
                    .col(OrgRoleCapabilities::CapabilityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrgRoleCapabilities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrgRoleCapabilities {
    Table,
    Id,
    OrgId,
    Role,
    CapabilityId,
    Granted,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Capabilities {
    Table,
    Id,
}
