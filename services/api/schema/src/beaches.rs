use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beaches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::beach_posts::Entity")]
    BeachPosts,
}

impl Related<super::beach_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeachPosts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
