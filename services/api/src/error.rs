use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("username already exists")]
    UsernameTaken,
    #[error("incorrect username or password")]
    InvalidCredentials,
    /// Request body could not be decoded into the expected shape.
    #[error("{0}")]
    Validation(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UsernameTaken => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors and already visible in the TraceLayer span.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let message = self.to_string();
        // `detail` mirrors `message` for clients written against the old API.
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": message,
            "detail": message,
        });
        (status, axum::Json(body)).into_response()
    }
}
