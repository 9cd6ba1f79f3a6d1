use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{evaluate, handlers, middleware::metrics_middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.max_upload_bytes();

    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Claims
        .route("/evaluate", post(evaluate::evaluate));

    Router::new()
        .route("/", get(handlers::root))
        .route("/evaluate", post(evaluate::evaluate))
        .route("/metrics", get(handlers::metrics))
        .nest("/api/v1", api_routes)
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
