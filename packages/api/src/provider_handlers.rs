// ABOUTME: HTTP handlers for care suggestion providers
// ABOUTME: Lists registered providers and runs a suggestion through the selected one

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<&'static str>,
    pub active: String,
}

/// List registered providers and the configured default
pub async fn list_providers(State(state): State<AppState>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: state.providers.names(),
        active: state.active_provider.to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub context: String,
    /// Overrides the configured provider for this request
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
    pub provider: String,
}

/// Get a care suggestion for a free-text context
pub async fn suggest(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let name = request
        .provider
        .as_deref()
        .unwrap_or(&*state.active_provider);

    info!("Requesting suggestion from provider: {}", name);

    let provider = state.providers.resolve(name)?;
    let suggestion = provider.suggest(&request.context).await;

    Ok(Json(SuggestResponse {
        suggestion,
        provider: provider.name().to_string(),
    }))
}
