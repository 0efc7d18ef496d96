//! Service tests against a real PostgreSQL database.
//!
//! Ignored by default. Point `TEST_DATABASE_URL` at a throwaway database and run
//! `cargo test -p beachwatch-api --test postgres -- --ignored`. Every test
//! drops and recreates the schema.

use axum_test::TestServer;
use chrono::Utc;
use http::{HeaderValue, StatusCode, header};
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use tokio::sync::{Mutex, MutexGuard};

use beachwatch_api::domain::credential::StoredCredential;
use beachwatch_api::domain::repository::{ReportRepository, UserRepository};
use beachwatch_api::domain::types::{Inform2Report, SAMPLE_CATALOG, Submission};
use beachwatch_api::error::ApiError;
use beachwatch_api::router::build_router;
use beachwatch_api::state::AppState;
use beachwatch_api::usecase::catalog::SeedCatalogUseCase;
use beachwatch_api_migration::{Migrator, MigratorTrait};
use beachwatch_api_schema::{beach_posts, beaches, inform2_submissions};
use beachwatch_auth_types::bearer::JwtSecret;
use beachwatch_testing::auth::TEST_JWT_SECRET;

/// Tests share one database; run them one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn fresh_state() -> (MutexGuard<'static, ()>, AppState) {
    let guard = DB_LOCK.lock().await;
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let db: DatabaseConnection = Database::connect(url).await.expect("connect");
    Migrator::fresh(&db).await.expect("reset schema");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        bcrypt_cost: 4,
        allow_registration: true,
    };
    SeedCatalogUseCase {
        catalog: state.catalog_repo(),
    }
    .execute(SAMPLE_CATALOG)
    .await
    .expect("seed");
    (guard, state)
}

fn inform2_body(date: &str) -> Value {
    json!({
        "date": date,
        "beach_name": "Santa Monica Beach",
        "hour": 14,
        "minute": 30,
        "person_name": "Ana Torres",
        "age": 34,
        "postal_code": "90401",
        "incidences": ["jellyfish sting", "sunburn"],
        "observations": "treated on site",
    })
}

async fn login(server: &TestServer, username: &str, password: &str) -> HeaderValue {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();
    let token = response.json::<Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_owned();
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn full_flow_over_http() {
    let (_guard, state) = fresh_state().await;
    let server = TestServer::new(build_router(state)).unwrap();
    let credentials = json!({ "username": "alice", "password": "pw123" });

    let register = server.post("/api/auth/register").json(&credentials).await;
    register.assert_status_ok();
    register.assert_json(&json!({ "message": "User created successfully" }));

    let bearer = login(&server, "alice", "pw123").await;

    let beaches = server
        .get("/api/beaches")
        .add_header(header::AUTHORIZATION, bearer.clone())
        .await;
    beaches.assert_status_ok();
    let beaches: Value = beaches.json();
    let names: Vec<&str> = beaches
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Malibu Beach", "Santa Monica Beach", "Venice Beach"]);

    let santa_monica = beaches[1]["id"].as_str().unwrap();
    let posts = server
        .get(&format!("/api/beach-posts/{santa_monica}"))
        .add_header(header::AUTHORIZATION, bearer.clone())
        .await;
    posts.assert_status_ok();
    let posts: Value = posts.json();
    let post_names: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(post_names, ["Post A", "Post B", "Post C"]);
    assert_eq!(posts[0]["beach_id"], santa_monica);

    let report = server
        .post("/api/inform2")
        .add_header(header::AUTHORIZATION, bearer)
        .json(&inform2_body("2025-07-01"))
        .await;
    report.assert_status_ok();
    let report: Value = report.json();
    assert_eq!(report["message"], "Inform 2 submitted successfully");
    assert!(!report["id"].as_str().unwrap().is_empty());

    let again = server.post("/api/auth/register").json(&credentials).await;
    assert_eq!(again.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(again.json::<Value>()["kind"], "USERNAME_TAKEN");
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn long_free_text_values_are_stored() {
    let (_guard, state) = fresh_state().await;
    let server = TestServer::new(build_router(state)).unwrap();

    let username = "u".repeat(300);
    server
        .post("/api/auth/register")
        .json(&json!({ "username": username, "password": "pw123" }))
        .await
        .assert_status_ok();
    let bearer = login(&server, &username, "pw123").await;

    let long_date = "Tuesday 1 July 2025, morning shift (CEST)";
    server
        .post("/api/inform2")
        .add_header(header::AUTHORIZATION, bearer.clone())
        .json(&inform2_body(long_date))
        .await
        .assert_status_ok();

    server
        .post("/api/inform4")
        .add_header(header::AUTHORIZATION, bearer)
        .json(&json!({
            "date": long_date,
            "beach_name": "Venice Beach",
            "hour": 9,
            "minute": 0,
            "wind_speed": 14.5,
            "temperature": 22.3,
            "wave_height": 1.1,
        }))
        .await
        .assert_status_ok();
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn duplicate_insert_maps_to_username_taken() {
    let (_guard, state) = fresh_state().await;
    let users = state.user_repo();
    let credential = StoredCredential::hash("pw123", 4).unwrap();

    users.create("alice", &credential, Utc::now()).await.unwrap();
    let err = users
        .create("alice", &credential, Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UsernameTaken));
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn incidences_round_trip_in_order() {
    let (_guard, state) = fresh_state().await;
    let report = Inform2Report {
        date: "2025-07-01".to_owned(),
        beach_name: "Venice Beach".to_owned(),
        hour: 8,
        minute: 5,
        person_name: "Sam Lee".to_owned(),
        age: 12,
        postal_code: "90291".to_owned(),
        incidences: vec!["sunburn".to_owned(), "cut foot".to_owned(), "lost child".to_owned()],
        observations: String::new(),
    };

    let id = state
        .report_repo()
        .insert_inform2(&Submission {
            report: report.clone(),
            username: "alice".to_owned(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();

    let row = inform2_submissions::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    let incidences: Vec<String> = serde_json::from_str(&row.incidences).unwrap();
    assert_eq!(incidences, report.incidences);
    assert_eq!(row.username, "alice");
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn seeding_runs_once() {
    let (_guard, state) = fresh_state().await;

    let seeded_again = SeedCatalogUseCase {
        catalog: state.catalog_repo(),
    }
    .execute(SAMPLE_CATALOG)
    .await
    .unwrap();
    assert!(!seeded_again);

    assert_eq!(beaches::Entity::find().count(&state.db).await.unwrap(), 3);
    assert_eq!(beach_posts::Entity::find().count(&state.db).await.unwrap(), 9);
}
