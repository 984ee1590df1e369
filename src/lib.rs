pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

use crate::config::Config;
use crate::db::repositories::{InMemoryProjectStore, ProjectStore};
use axum::{Router, http::HeaderValue, middleware::from_fn};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub projects: Arc<dyn ProjectStore>,
}

impl AppState {
    pub fn new(config: Config, projects: Arc<dyn ProjectStore>) -> Self {
        Self {
            config: Arc::new(config),
            projects,
        }
    }

    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(InMemoryProjectStore::new()))
    }
}

/// Router with CORS and request logging applied.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server().cors_origins);

    routes::create_router(Arc::new(state))
        .layer(cors)
        .layer(from_fn(middleware::logger::logger))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

pub fn init_tracing(config: &Config) {
    let logging = config.logging();
    let level = logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_max_level(level)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .init();
        }
    }
}
