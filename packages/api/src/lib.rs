// ABOUTME: HTTP API layer for the laundry tracker providing REST endpoints and routing
// ABOUTME: Integration layer over the item store and the provider registry

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod cors;
pub mod error;
pub mod extract;
pub mod health_handlers;
pub mod laundry_handlers;
pub mod provider_handlers;
pub mod state;

pub use cors::build_cors_layer;
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Default mount point of the laundry item routes
pub const LAUNDRY_ROUTE_PREFIX: &str = "/api/laundry";

/// Creates the laundry items router mounted at `prefix`.
///
/// The collection answers with and without a trailing slash.
pub fn create_laundry_router(prefix: &str) -> Router<AppState> {
    let prefix = prefix.trim_end_matches('/');
    let collection = get(laundry_handlers::list_items).post(laundry_handlers::create_item);

    // Mounted at the root there is only one collection path
    let router = if prefix.is_empty() {
        Router::new().route("/", collection)
    } else {
        Router::new()
            .route(prefix, collection.clone())
            .route(&format!("{}/", prefix), collection)
    };

    router.route(
        &format!("{}/{{id}}", prefix),
        get(laundry_handlers::get_item)
            .patch(laundry_handlers::update_item)
            .delete(laundry_handlers::delete_item),
    )
}

/// Creates the full application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handlers::health_check))
        .route("/api/providers", get(provider_handlers::list_providers))
        .route("/api/ai/suggest", post(provider_handlers::suggest))
        .merge(create_laundry_router(LAUNDRY_ROUTE_PREFIX))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
