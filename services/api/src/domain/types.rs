use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::credential::StoredCredential;

/// Login account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub credential: StoredCredential,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beach {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeachPost {
    pub id: i32,
    pub beach_id: i32,
    pub name: String,
}

/// Incident report as submitted by a client.
///
/// Unknown fields (including any client-supplied `username`) are ignored; the
/// submitter is always taken from the bearer token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Inform2Report {
    pub date: String,
    pub beach_name: String,
    pub hour: i32,
    pub minute: i32,
    pub person_name: String,
    pub age: i32,
    pub postal_code: String,
    pub incidences: Vec<String>,
    pub observations: String,
}

/// Environmental conditions report as submitted by a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Inform4Report {
    pub date: String,
    pub beach_name: String,
    pub hour: i32,
    pub minute: i32,
    pub wind_speed: f64,
    pub temperature: f64,
    pub wave_height: f64,
}

/// A report stamped with its submitter and server-side receive time.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<R> {
    pub report: R,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// One beach of the bootstrap catalog with its post names.
#[derive(Debug, Clone, Copy)]
pub struct SeedBeach {
    pub name: &'static str,
    pub posts: &'static [&'static str],
}

const SAMPLE_POSTS: &[&str] = &["Post A", "Post B", "Post C"];

/// Inserted once when the beach table is empty.
pub const SAMPLE_CATALOG: &[SeedBeach] = &[
    SeedBeach {
        name: "Santa Monica Beach",
        posts: SAMPLE_POSTS,
    },
    SeedBeach {
        name: "Venice Beach",
        posts: SAMPLE_POSTS,
    },
    SeedBeach {
        name: "Malibu Beach",
        posts: SAMPLE_POSTS,
    },
];
