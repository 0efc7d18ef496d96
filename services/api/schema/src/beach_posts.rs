use sea_orm::entity::prelude::*;

/// Named sub-location of a beach. Deleted together with its beach.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beach_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beach_id: i32,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beaches::Entity",
        from = "Column::BeachId",
        to = "super::beaches::Column::Id",
        on_delete = "Cascade"
    )]
    Beach,
}

impl Related<super::beaches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beach.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
