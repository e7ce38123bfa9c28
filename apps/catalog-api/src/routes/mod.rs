use axum::Router;

use crate::state::AppState;

pub mod products;
pub mod system;

/// Every route of the service, before state and middleware are attached.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(system::router())
        .nest("/api/products", products::router())
}
