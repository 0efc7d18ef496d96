use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing::{info, warn};

use beachwatch_api::config::ApiConfig;
use beachwatch_api::domain::types::SAMPLE_CATALOG;
use beachwatch_api::router::build_router;
use beachwatch_api::state::AppState;
use beachwatch_api::usecase::catalog::SeedCatalogUseCase;
use beachwatch_api_migration::{Migrator, MigratorTrait};
use beachwatch_auth_types::bearer::JwtSecret;
use beachwatch_core::config::Config;
use beachwatch_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env().expect("failed to load config from environment");
    config.validate().expect("invalid configuration");
    if config.uses_default_secret() {
        warn!("JWT_SECRET_KEY is not set; signing tokens with the insecure default secret");
    }

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let state = AppState {
        db: db.clone(),
        jwt_secret: JwtSecret::new(config.jwt_secret_key),
        bcrypt_cost: config.bcrypt_cost,
        allow_registration: config.allow_registration,
    };

    SeedCatalogUseCase {
        catalog: state.catalog_repo(),
    }
    .execute(SAMPLE_CATALOG)
    .await
    .expect("failed to seed beach catalog");

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = TcpListener::bind(&addr).await.expect("failed to bind");

    info!(registration = config.allow_registration, "api listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    if let Err(e) = db.close().await {
        warn!(error = %e, "failed to close database pool");
    }
    info!("api stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
