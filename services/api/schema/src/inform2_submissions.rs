use sea_orm::entity::prelude::*;

/// Incident report. `incidences` is a JSON array of strings stored as text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inform2_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub beach_name: String,
    pub hour: i32,
    pub minute: i32,
    #[sea_orm(column_type = "Text")]
    pub person_name: String,
    pub age: i32,
    #[sea_orm(column_type = "Text")]
    pub postal_code: String,
    #[sea_orm(column_type = "Text")]
    pub incidences: String,
    #[sea_orm(column_type = "Text")]
    pub observations: String,
    #[sea_orm(column_type = "Text")]
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
