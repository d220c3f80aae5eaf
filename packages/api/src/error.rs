// ABOUTME: API error type and its HTTP mapping
// ABOUTME: Maps validation, storage and provider failures to status codes and a JSON detail

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use laundry_core::ValidationError;
use laundry_providers::ProviderError;
use laundry_storage::StorageError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Item not found")]
    NotFound,

    #[error("tag_id already in use")]
    TagInUse,

    #[error(transparent)]
    UnknownProvider(#[from] ProviderError),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    InvalidPath(#[from] PathRejection),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ApiError::NotFound,
            StorageError::TagInUse(_) => ApiError::TagInUse,
            other => ApiError::Storage(other),
        }
    }
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::TagInUse => StatusCode::BAD_REQUEST,
            ApiError::UnknownProvider(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::InvalidPath(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ApiError::Validation(e) => ErrorResponse {
                detail: e.message,
                field: Some(e.field),
            },
            ApiError::InvalidBody(rejection) => ErrorResponse {
                detail: rejection.body_text(),
                field: None,
            },
            ApiError::InvalidPath(rejection) => ErrorResponse {
                detail: rejection.body_text(),
                field: None,
            },
            ApiError::Storage(e) => {
                // Never leak database details to clients
                error!("Storage error: {}", e);
                ErrorResponse {
                    detail: "Internal server error".to_string(),
                    field: None,
                }
            }
            other => ErrorResponse {
                detail: other.to_string(),
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_map_to_domain_variants() {
        assert!(matches!(ApiError::from(StorageError::NotFound), ApiError::NotFound));
        assert!(matches!(
            ApiError::from(StorageError::TagInUse("tag-1".to_string())),
            ApiError::TagInUse
        ));
        assert!(matches!(
            ApiError::from(StorageError::Database("boom".to_string())),
            ApiError::Storage(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::TagInUse.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(ValidationError::empty_label()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(ProviderError::Unknown("x".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Storage(StorageError::Database("boom".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "Item not found");
        assert_eq!(ApiError::TagInUse.to_string(), "tag_id already in use");
        assert_eq!(
            ApiError::from(ProviderError::Unknown("x".to_string())).to_string(),
            "Unknown provider: x"
        );
    }
}
