use sea_orm::entity::prelude::*;

/// Environmental conditions report.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inform4_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub beach_name: String,
    pub hour: i32,
    pub minute: i32,
    #[sea_orm(column_type = "Double")]
    pub wind_speed: f64,
    #[sea_orm(column_type = "Double")]
    pub temperature: f64,
    #[sea_orm(column_type = "Double")]
    pub wave_height: f64,
    #[sea_orm(column_type = "Text")]
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
