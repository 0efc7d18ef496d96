use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BeachPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BeachPosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BeachPosts::BeachId).integer().not_null())
                    .col(ColumnDef::new(BeachPosts::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(BeachPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beach_posts_beach_id")
                            .from(BeachPosts::Table, BeachPosts::BeachId)
                            .to(Beaches::Table, Beaches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(BeachPosts::Table)
                    .col(BeachPosts::BeachId)
                    .name("idx_beach_posts_beach_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BeachPosts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BeachPosts {
    Table,
    Id,
    BeachId,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Beaches {
    Table,
    Id,
}
