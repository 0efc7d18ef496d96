use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use beachwatch_auth_types::bearer::BearerIdentity;

use crate::domain::types::{Beach, BeachPost};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::catalog::{ListBeachPostsUseCase, ListBeachesUseCase};

#[derive(Debug, Serialize)]
pub struct BeachResponse {
    pub id: String,
    pub name: String,
}

impl From<Beach> for BeachResponse {
    fn from(beach: Beach) -> Self {
        Self {
            id: beach.id.to_string(),
            name: beach.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BeachPostResponse {
    pub id: String,
    pub beach_id: String,
    pub name: String,
}

impl From<BeachPost> for BeachPostResponse {
    fn from(post: BeachPost) -> Self {
        Self {
            id: post.id.to_string(),
            beach_id: post.beach_id.to_string(),
            name: post.name,
        }
    }
}

// ── GET /api/beaches ─────────────────────────────────────────────────────────

pub async fn list_beaches(
    _identity: BearerIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<BeachResponse>>, ApiError> {
    let usecase = ListBeachesUseCase {
        catalog: state.catalog_repo(),
    };
    let beaches = usecase.execute().await?;
    Ok(Json(beaches.into_iter().map(BeachResponse::from).collect()))
}

// ── GET /api/beach-posts/{beach_id} ──────────────────────────────────────────

pub async fn list_beach_posts(
    _identity: BearerIdentity,
    State(state): State<AppState>,
    Path(beach_id): Path<String>,
) -> Result<Json<Vec<BeachPostResponse>>, ApiError> {
    let usecase = ListBeachPostsUseCase {
        catalog: state.catalog_repo(),
    };
    let posts = usecase.execute(&beach_id).await?;
    Ok(Json(posts.into_iter().map(BeachPostResponse::from).collect()))
}
