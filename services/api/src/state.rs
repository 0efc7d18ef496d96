use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use beachwatch_auth_types::bearer::JwtSecret;

use crate::infra::db::{DbCatalogRepository, DbReportRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub bcrypt_cost: u32,
    pub allow_registration: bool,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn catalog_repo(&self) -> DbCatalogRepository {
        DbCatalogRepository {
            db: self.db.clone(),
        }
    }

    pub fn report_repo(&self) -> DbReportRepository {
        DbReportRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}
