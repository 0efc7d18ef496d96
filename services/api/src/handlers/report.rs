use axum::{Json, extract::State};

use beachwatch_auth_types::bearer::BearerIdentity;

use crate::domain::types::{Inform2Report, Inform4Report};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::handlers::CreatedResponse;
use crate::state::AppState;
use crate::usecase::report::{SubmitInform2UseCase, SubmitInform4UseCase};

// ── POST /api/inform2 ────────────────────────────────────────────────────────

pub async fn submit_inform2(
    identity: BearerIdentity,
    State(state): State<AppState>,
    ApiJson(report): ApiJson<Inform2Report>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let usecase = SubmitInform2UseCase {
        reports: state.report_repo(),
    };
    let id = usecase.execute(report, identity.username).await?;
    Ok(Json(CreatedResponse {
        message: "Inform 2 submitted successfully",
        id: id.to_string(),
    }))
}

// ── POST /api/inform4 ────────────────────────────────────────────────────────

pub async fn submit_inform4(
    identity: BearerIdentity,
    State(state): State<AppState>,
    ApiJson(report): ApiJson<Inform4Report>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let usecase = SubmitInform4UseCase {
        reports: state.report_repo(),
    };
    let id = usecase.execute(report, identity.username).await?;
    Ok(Json(CreatedResponse {
        message: "Inform 4 submitted successfully",
        id: id.to_string(),
    }))
}
