use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use routes::{
    health::health_check,
    search::{search_api, search_page},
};
use services::google_books::VolumeSource;

pub type Source = Arc<dyn VolumeSource + Send + Sync>;

pub fn app(source: Source) -> Router {
    Router::new()
        .route("/", get(search_page))
        .route("/api/search", get(search_api))
        .route("/status", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(source)
}
