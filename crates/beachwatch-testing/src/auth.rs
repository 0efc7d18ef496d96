//! Bearer-token helpers for router tests.
//!
//! Mints tokens signed with a known secret so tests can call protected routes
//! without going through the login flow.

use beachwatch_auth_types::token::{
    ACCESS_TOKEN_EXP, JwtClaims, encode_claims, issue_access_token, now_secs,
};

/// Secret shared by tests that build an app state and mint tokens for it.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable bearer identity for test requests.
pub struct MockBearer {
    pub username: String,
    pub secret: String,
}

impl MockBearer {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_owned(),
            secret: TEST_JWT_SECRET.to_owned(),
        }
    }

    /// Sign with a different secret (the server should answer 401).
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.secret = secret.to_owned();
        self
    }

    /// A fresh token valid for the normal lifetime.
    pub fn token(&self) -> String {
        issue_access_token(&self.username, &self.secret)
            .expect("sign test token")
            .0
    }

    /// A token whose `exp` lies one lifetime in the past.
    pub fn expired_token(&self) -> String {
        let claims = JwtClaims {
            sub: self.username.clone(),
            exp: now_secs() - ACCESS_TOKEN_EXP,
        };
        encode_claims(&claims, &self.secret).expect("sign expired test token")
    }
}
