// ABOUTME: Liveness endpoint
// ABOUTME: Reports service name, version and current time

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "laundry-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let value = health_check().await.0;

        assert_eq!(value.get("status").and_then(|v| v.as_str()), Some("ok"));
        assert_eq!(
            value.get("service").and_then(|v| v.as_str()),
            Some("laundry-api")
        );
        assert!(value.get("version").is_some());
    }

    #[tokio::test]
    async fn test_health_check_timestamp() {
        let value = health_check().await.0;
        let timestamp = value.get("timestamp").and_then(|v| v.as_i64());

        // Timestamp should be reasonable (after year 2020)
        assert!(timestamp.unwrap() > 1577836800);
    }
}
