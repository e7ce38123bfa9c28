//! # catalog-api: HTTP Service for the Forestal Catalog
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP request                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CorsLayer → TraceLayer (one span per request)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  routes::products / routes::system                                     │
//! │       │  extractors → dto → forestal-core validation                   │
//! │       ▼                                                                 │
//! │  forestal-db: Catalog (filter, get, list) / ProductRepository (writes) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<T> or ApiError { status: "error", code, message }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use state::AppState;

/// Builds the router with state and middleware attached.
pub fn build_app(state: AppState, cors_allow_any: bool) -> Router {
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_allow_any {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
