//! `Authorization: Bearer` extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::request::Parts;

use crate::token::{AuthError, validate_access_token};

/// HMAC secret used to sign and verify access tokens.
///
/// Services expose it from their state via [`FromRef`] so that
/// [`BearerIdentity`] can be used on any router.
#[derive(Clone)]
pub struct JwtSecret(Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

/// Authenticated caller, taken from a valid bearer token.
///
/// Rejects with 403 when the header is absent or not a `Bearer` credential,
/// and with 401 when the token fails validation.
#[derive(Debug, Clone)]
pub struct BearerIdentity {
    pub username: String,
}

impl<S> FromRequestParts<S> for BearerIdentity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = AuthError;

    // Resolve synchronously and hand back a 'static future; an `async fn` here
    // would capture `parts` and `state` and trip E0195 under axum-core 0.5.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::MissingToken)
            .and_then(|Authorization(bearer)| {
                validate_access_token(bearer.token(), secret.as_str())
            })
            .map(|info| Self {
                username: info.subject,
            });

        if let Err(ref e) = result {
            tracing::debug!(kind = e.kind(), "bearer authentication rejected");
        }

        async move { result }
    }
}
