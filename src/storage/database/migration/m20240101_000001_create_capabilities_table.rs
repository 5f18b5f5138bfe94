use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Capabilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Capabilities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Capabilities::Key)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Capabilities::Name).string().not_null())
                    .col(ColumnDef::new(Capabilities::Description).text().not_null())
                    .col(ColumnDef::new(Capabilities::Category).string().not_null())
                    .col(ColumnDef::new(Capabilities::MinRoleRequired).string().null())
                    .col(
                        ColumnDef::new(Capabilities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_capabilities_category")
                    .table(Capabilities::Table)
                    .col(Capabilities::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Capabilities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Capabilities {
    Table,
    Id,
    Key,
    Name,
    Description,
    Category,
    MinRoleRequired,
    CreatedAt,
}
