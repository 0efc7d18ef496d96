use beachwatch_api::domain::credential::StoredCredential;
use beachwatch_api::error::ApiError;
use beachwatch_api::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use beachwatch_auth_types::token::{ACCESS_TOKEN_EXP, now_secs, validate_access_token};
use beachwatch_testing::auth::TEST_JWT_SECRET;

use crate::helpers::{MockUserRepo, TEST_BCRYPT_COST};

fn register_usecase(repo: &MockUserRepo) -> RegisterUseCase<MockUserRepo> {
    RegisterUseCase {
        users: repo.clone(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
}

fn login_usecase(repo: &MockUserRepo) -> LoginUseCase<MockUserRepo> {
    LoginUseCase {
        users: repo.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

fn register_input(username: &str, password: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

fn login_input(username: &str, password: &str) -> LoginInput {
    LoginInput {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_hashed_password_on_register() {
    let repo = MockUserRepo::empty();
    register_usecase(&repo)
        .execute(register_input("alice", "pw123"))
        .await
        .unwrap();

    let users = repo.users.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "alice");
    assert!(matches!(users[0].credential, StoredCredential::Hashed(_)));
    assert_ne!(users[0].credential.as_stored(), "pw123");
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let repo = MockUserRepo::empty();
    let usecase = register_usecase(&repo);
    usecase
        .execute(register_input("alice", "pw123"))
        .await
        .unwrap();

    let result = usecase.execute(register_input("alice", "other")).await;
    assert!(
        matches!(result, Err(ApiError::UsernameTaken)),
        "expected UsernameTaken, got {result:?}"
    );
    assert_eq!(repo.users.lock().unwrap().len(), 1);
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_for_registered_user() {
    let repo = MockUserRepo::empty();
    register_usecase(&repo)
        .execute(register_input("alice", "pw123"))
        .await
        .unwrap();

    let out = login_usecase(&repo)
        .execute(login_input("alice", "pw123"))
        .await
        .unwrap();

    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.subject, "alice");
    assert_eq!(info.exp, out.access_token_exp);
    assert!(out.access_token_exp >= now_secs() + ACCESS_TOKEN_EXP - 5);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let repo = MockUserRepo::empty();
    register_usecase(&repo)
        .execute(register_input("alice", "pw123"))
        .await
        .unwrap();

    let result = login_usecase(&repo)
        .execute(login_input("alice", "wrong"))
        .await;
    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_user() {
    let result = login_usecase(&MockUserRepo::empty())
        .execute(login_input("nobody", "pw123"))
        .await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn should_accept_legacy_plaintext_password() {
    let repo = MockUserRepo::with_stored("lifeguard1", "sunrise");

    let out = login_usecase(&repo)
        .execute(login_input("lifeguard1", "sunrise"))
        .await
        .unwrap();
    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.subject, "lifeguard1");
}

#[tokio::test]
async fn should_reject_wrong_legacy_plaintext_password() {
    let repo = MockUserRepo::with_stored("lifeguard1", "sunrise");

    let result = login_usecase(&repo)
        .execute(login_input("lifeguard1", "sunset"))
        .await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn should_not_treat_hash_as_plaintext() {
    let hash = bcrypt::hash("pw123", TEST_BCRYPT_COST).unwrap();
    let repo = MockUserRepo::with_stored("alice", &hash);

    // Presenting the stored hash itself must not log in.
    let result = login_usecase(&repo).execute(login_input("alice", &hash)).await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));

    login_usecase(&repo)
        .execute(login_input("alice", "pw123"))
        .await
        .unwrap();
}
