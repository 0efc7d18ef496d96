use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        bcrypt_cost: state.bcrypt_cost,
    };
    usecase
        .execute(RegisterInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "User created successfully",
    }))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "login")]
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let out = usecase
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    Ok(Json(TokenResponse {
        access_token: out.access_token,
        token_type: "bearer",
    }))
}
