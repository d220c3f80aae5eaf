// ABOUTME: CORS layer construction
// ABOUTME: Allows one configured origin, or any origin for "*"

use axum::http::{header::InvalidHeaderValue, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

pub fn build_cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if origin.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    Ok(layer.allow_origin(origin.trim().parse::<HeaderValue>()?))
}
