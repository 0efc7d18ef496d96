pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_beaches;
mod m20250601_000003_create_beach_posts;
mod m20250601_000004_create_inform2_submissions;
mod m20250601_000005_create_inform4_submissions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_beaches::Migration),
            Box::new(m20250601_000003_create_beach_posts::Migration),
            Box::new(m20250601_000004_create_inform2_submissions::Migration),
            Box::new(m20250601_000005_create_inform4_submissions::Migration),
        ]
    }
}
