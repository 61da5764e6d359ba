use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

use super::{handlers, state::AppState, ServerConfig};

pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // Open to every origin. Credentials are not allowed together with a wildcard origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .route("/log-prediction", post(handlers::log_prediction))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_upload_size))
        .layer(cors)
}
