//! HS256 bearer-token issue and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Access-token lifetime in seconds (24 hours).
pub const ACCESS_TOKEN_EXP: u64 = 86_400;

/// Identity extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// Username the token was issued to.
    pub subject: String,
    pub exp: u64,
}

/// Errors raised while authenticating a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("not authenticated")]
    MissingToken,
    #[error("could not validate credentials")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("could not validate credentials")]
    Malformed,
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidSignature | Self::Malformed => "INVALID_TOKEN",
            Self::Expired => "TOKEN_EXPIRED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken => StatusCode::FORBIDDEN,
            Self::InvalidSignature | Self::Expired | Self::Malformed => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        // `detail` mirrors `message` for clients written against the old API.
        let mut response = (
            self.status(),
            Json(serde_json::json!({
                "kind": self.kind(),
                "message": message,
                "detail": message,
            })),
        )
            .into_response();
        if self.status() == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                http::header::WWW_AUTHENTICATE,
                http::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | username |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: u64,
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign arbitrary claims with the shared secret.
pub fn encode_claims(claims: &JwtClaims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Issue an access token for `subject`, valid for [`ACCESS_TOKEN_EXP`] seconds.
/// Returns the token and its expiry.
pub fn issue_access_token(
    subject: &str,
    secret: &str,
) -> Result<(String, u64), jsonwebtoken::errors::Error> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = JwtClaims {
        sub: subject.to_owned(),
        exp,
    };
    Ok((encode_claims(&claims, secret)?, exp))
}

/// Validate a bearer token, returning the embedded identity.
///
/// HS256 only, `exp` and `sub` required, no clock leeway.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    if data.claims.sub.is_empty() {
        return Err(AuthError::Malformed);
    }

    Ok(TokenInfo {
        subject: data.claims.sub,
        exp: data.claims.exp,
    })
}
