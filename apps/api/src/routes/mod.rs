pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::filter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/jobs/catalog", get(handlers::handle_get_catalog))
        .route("/api/v1/jobs/refresh", post(handlers::handle_refresh))
        // Filter engine
        .route("/api/v1/jobs/facets", get(handlers::handle_get_facets))
        .route("/api/v1/jobs/search", post(handlers::handle_search))
        .route(
            "/api/v1/jobs/selection/toggle",
            post(handlers::handle_toggle),
        )
        .route("/api/v1/jobs/page", post(handlers::handle_navigate))
        .with_state(state)
}
