pub mod config;
pub mod error;
pub mod routes;

use axum::{routing::get, Extension, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

/// Build the application router with its shared state and layers.
pub fn app(config: config::Config) -> Router {
    // The browser frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/generate-game", get(routes::game::generate_game))
        .route("/openings", get(routes::openings::list_openings))
        .fallback(routes::not_found)
        .layer(Extension(config))
        .layer(CompressionLayer::new())
        .layer(cors)
}
