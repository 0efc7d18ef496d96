use anyhow::Context as _;
use chrono::Utc;

use beachwatch_auth_types::token::issue_access_token;

use crate::domain::credential::StoredCredential;
use crate::domain::repository::UserRepository;
use crate::error::ApiError;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

pub struct RegisterUseCase<R: UserRepository> {
    pub users: R,
    pub bcrypt_cost: u32,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<(), ApiError> {
        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(ApiError::UsernameTaken);
        }

        let password = input.password;
        let cost = self.bcrypt_cost;
        // bcrypt blocks; run it on the blocking pool.
        let credential = tokio::task::spawn_blocking(move || StoredCredential::hash(&password, cost))
            .await
            .context("join password hashing task")?
            .context("hash password")?;

        self.users
            .create(&input.username, &credential, Utc::now())
            .await?;
        tracing::info!(username = %input.username, "user registered");
        Ok(())
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct LoginUseCase<R: UserRepository> {
    pub users: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let user = self
            .users
            .find_by_username(&input.username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let credential = user.credential;
        let password = input.password;
        let (credential, matches) = tokio::task::spawn_blocking(move || {
            let matches = credential.verify(&password);
            (credential, matches)
        })
        .await
        .context("join password verification task")?;

        if !matches.context("verify password")? {
            return Err(ApiError::InvalidCredentials);
        }

        if credential.is_legacy() {
            tracing::warn!(username = %user.username, "login with legacy plaintext password");
        }

        let (access_token, access_token_exp) =
            issue_access_token(&user.username, &self.jwt_secret)
                .context("sign access token")?;

        Ok(LoginOutput {
            access_token,
            access_token_exp,
        })
    }
}
