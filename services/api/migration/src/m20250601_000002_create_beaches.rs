use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beaches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Beaches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Beaches::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Beaches::CreatedAt)
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
                    .table(Beaches::Table)
                    .col(Beaches::Name)
                    .name("idx_beaches_name")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beaches::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Beaches {
    Table,
    Id,
    Name,
    CreatedAt,
}
