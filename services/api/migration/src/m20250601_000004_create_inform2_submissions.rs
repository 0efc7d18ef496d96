use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inform2Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inform2Submissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inform2Submissions::Date).text().not_null())
                    .col(ColumnDef::new(Inform2Submissions::BeachName).text().not_null())
                    .col(ColumnDef::new(Inform2Submissions::Hour).integer().not_null())
                    .col(ColumnDef::new(Inform2Submissions::Minute).integer().not_null())
                    .col(ColumnDef::new(Inform2Submissions::PersonName).text().not_null())
                    .col(ColumnDef::new(Inform2Submissions::Age).integer().not_null())
                    .col(ColumnDef::new(Inform2Submissions::PostalCode).text().not_null())
                    .col(ColumnDef::new(Inform2Submissions::Incidences).text().not_null())
                    .col(ColumnDef::new(Inform2Submissions::Observations).text().not_null())
                    .col(ColumnDef::new(Inform2Submissions::Username).text().not_null())
                    .col(
                        ColumnDef::new(Inform2Submissions::CreatedAt)
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
                    .table(Inform2Submissions::Table)
                    .col(Inform2Submissions::Date)
                    .name("idx_inform2_submissions_date")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Inform2Submissions::Table)
                    .col(Inform2Submissions::Username)
                    .name("idx_inform2_submissions_username")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inform2Submissions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Inform2Submissions {
    Table,
    Id,
    Date,
    BeachName,
    Hour,
    Minute,
    PersonName,
    Age,
    PostalCode,
    Incidences,
    Observations,
    Username,
    CreatedAt,
}
