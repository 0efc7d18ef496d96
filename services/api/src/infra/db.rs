use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use beachwatch_api_schema::{
    beach_posts, beaches, inform2_submissions, inform4_submissions, users,
};

use crate::domain::credential::StoredCredential;
use crate::domain::repository::{CatalogRepository, ReportRepository, UserRepository};
use crate::domain::types::{
    Beach, BeachPost, Inform2Report, Inform4Report, SeedBeach, Submission, User,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(
        &self,
        username: &str,
        credential: &StoredCredential,
        created_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        let result = users::ActiveModel {
            username: Set(username.to_owned()),
            password_hash: Set(credential.as_stored().to_owned()),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            // Lost a race with a concurrent registration of the same name.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ApiError::UsernameTaken)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        credential: StoredCredential::from_stored(model.password_hash),
        created_at: model.created_at,
    }
}

// ── Catalog repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCatalogRepository {
    pub db: DatabaseConnection,
}

impl CatalogRepository for DbCatalogRepository {
    async fn list_beaches(&self) -> Result<Vec<Beach>, ApiError> {
        let models = beaches::Entity::find()
            .order_by_asc(beaches::Column::Name)
            .order_by_asc(beaches::Column::Id)
            .all(&self.db)
            .await
            .context("list beaches")?;
        Ok(models
            .into_iter()
            .map(|m| Beach {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn list_posts(&self, beach_id: i32) -> Result<Vec<BeachPost>, ApiError> {
        let models = beach_posts::Entity::find()
            .filter(beach_posts::Column::BeachId.eq(beach_id))
            .order_by_asc(beach_posts::Column::Name)
            .order_by_asc(beach_posts::Column::Id)
            .all(&self.db)
            .await
            .context("list beach posts")?;
        Ok(models
            .into_iter()
            .map(|m| BeachPost {
                id: m.id,
                beach_id: m.beach_id,
                name: m.name,
            })
            .collect())
    }

    async fn count_beaches(&self) -> Result<u64, ApiError> {
        let count = beaches::Entity::find()
            .count(&self.db)
            .await
            .context("count beaches")?;
        Ok(count)
    }

    async fn insert_catalog(&self, catalog: &[SeedBeach]) -> Result<(), ApiError> {
        let now = Utc::now();
        let txn = self.db.begin().await.context("begin catalog transaction")?;

        for seed in catalog {
            let beach = beaches::ActiveModel {
                name: Set(seed.name.to_owned()),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .context("insert beach")?;

            if seed.posts.is_empty() {
                continue;
            }
            let posts = seed.posts.iter().map(|name| beach_posts::ActiveModel {
                beach_id: Set(beach.id),
                name: Set((*name).to_owned()),
                created_at: Set(now),
                ..Default::default()
            });
            beach_posts::Entity::insert_many(posts)
                .exec(&txn)
                .await
                .context("insert beach posts")?;
        }

        txn.commit().await.context("commit catalog transaction")?;
        Ok(())
    }
}

// ── Report repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReportRepository {
    pub db: DatabaseConnection,
}

impl ReportRepository for DbReportRepository {
    async fn insert_inform2(
        &self,
        submission: &Submission<Inform2Report>,
    ) -> Result<i32, ApiError> {
        let report = &submission.report;
        let incidences =
            serde_json::to_string(&report.incidences).context("encode incidences")?;

        // Dropping the transaction without commit rolls it back.
        let txn = self.db.begin().await.context("begin inform2 transaction")?;
        let model = inform2_submissions::ActiveModel {
            date: Set(report.date.clone()),
            beach_name: Set(report.beach_name.clone()),
            hour: Set(report.hour),
            minute: Set(report.minute),
            person_name: Set(report.person_name.clone()),
            age: Set(report.age),
            postal_code: Set(report.postal_code.clone()),
            incidences: Set(incidences),
            observations: Set(report.observations.clone()),
            username: Set(submission.username.clone()),
            created_at: Set(submission.created_at),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert inform2 submission")?;
        txn.commit().await.context("commit inform2 submission")?;

        Ok(model.id)
    }

    async fn insert_inform4(
        &self,
        submission: &Submission<Inform4Report>,
    ) -> Result<i32, ApiError> {
        let report = &submission.report;

        let txn = self.db.begin().await.context("begin inform4 transaction")?;
        let model = inform4_submissions::ActiveModel {
            date: Set(report.date.clone()),
            beach_name: Set(report.beach_name.clone()),
            hour: Set(report.hour),
            minute: Set(report.minute),
            wind_speed: Set(report.wind_speed),
            temperature: Set(report.temperature),
            wave_height: Set(report.wave_height),
            username: Set(submission.username.clone()),
            created_at: Set(submission.created_at),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert inform4 submission")?;
        txn.commit().await.context("commit inform4 submission")?;

        Ok(model.id)
    }
}
