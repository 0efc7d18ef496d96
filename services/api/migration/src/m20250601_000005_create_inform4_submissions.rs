use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inform4Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inform4Submissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inform4Submissions::Date).text().not_null())
                    .col(ColumnDef::new(Inform4Submissions::BeachName).text().not_null())
                    .col(ColumnDef::new(Inform4Submissions::Hour).integer().not_null())
                    .col(ColumnDef::new(Inform4Submissions::Minute).integer().not_null())
                    .col(ColumnDef::new(Inform4Submissions::WindSpeed).double().not_null())
                    .col(ColumnDef::new(Inform4Submissions::Temperature).double().not_null())
                    .col(ColumnDef::new(Inform4Submissions::WaveHeight).double().not_null())
                    .col(ColumnDef::new(Inform4Submissions::Username).text().not_null())
                    .col(
                        ColumnDef::new(Inform4Submissions::CreatedAt)
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
                    .table(Inform4Submissions::Table)
                    .col(Inform4Submissions::Date)
                    .name("idx_inform4_submissions_date")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Inform4Submissions::Table)
                    .col(Inform4Submissions::Username)
                    .name("idx_inform4_submissions_username")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inform4Submissions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Inform4Submissions {
    Table,
    Id,
    Date,
    BeachName,
    Hour,
    Minute,
    WindSpeed,
    Temperature,
    WaveHeight,
    Username,
    CreatedAt,
}
