pub mod auth;
pub mod catalog;
pub mod health;
pub mod report;

use serde::Serialize;

/// Body of simple acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Acknowledgement carrying the id of the created record.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: String,
}
