use serde::Deserialize;

use beachwatch_core::config::Config;

/// Signing secret used when `JWT_SECRET_KEY` is unset. Never deploy with it.
pub const INSECURE_DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Work factors bcrypt accepts.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    BcryptCost(u32),
}

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing bearer tokens. Env var: `JWT_SECRET_KEY`.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret_key: String,
    /// TCP port to listen on (default 8001). Env var: `API_PORT`.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,
    /// Mount `POST /api/auth/register`. Turn off when accounts are provisioned
    /// out-of-band. Env var: `ALLOW_REGISTRATION`.
    #[serde(default = "default_allow_registration")]
    pub allow_registration: bool,
    /// bcrypt work factor for newly registered passwords. Env var: `BCRYPT_COST`.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Config for ApiConfig {}

impl ApiConfig {
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret_key == INSECURE_DEFAULT_JWT_SECRET
    }

    /// Reject values that would only fail later, at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCost(self.bcrypt_cost));
        }
        Ok(())
    }
}

fn default_jwt_secret() -> String {
    INSECURE_DEFAULT_JWT_SECRET.to_owned()
}

fn default_api_port() -> u16 {
    8001
}

fn default_db_max_connections() -> u32 {
    10
}

fn default_db_min_connections() -> u32 {
    1
}

fn default_allow_registration() -> bool {
    true
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}
