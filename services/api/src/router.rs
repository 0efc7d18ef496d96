use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use beachwatch_core::health::healthz;
use beachwatch_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{login, register},
    catalog::{list_beach_posts, list_beaches},
    health::readyz,
    report::{submit_inform2, submit_inform4},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut api = Router::new()
        // Auth
        .route("/auth/login", post(login));
    if state.allow_registration {
        api = api.route("/auth/register", post(register));
    }
    let api = api
        // Catalog
        .route("/beaches", get(list_beaches))
        .route("/beach-posts/{beach_id}", get(list_beach_posts))
        // Reports
        .route("/inform2", post(submit_inform2))
        .route("/inform4", post(submit_inform4));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/api", api)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id_layer())
        .with_state(state)
}
