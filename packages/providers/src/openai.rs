// ABOUTME: Placeholder provider reserved for a hosted model integration
// ABOUTME: Echoes the context back and never calls the network

use async_trait::async_trait;
use tracing::debug;

use crate::Provider;

#[derive(Debug, Default, Clone)]
pub struct OpenAiProvider {
    api_key: Option<String>,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn suggest(&self, context: &str) -> String {
        debug!("openai placeholder called (api key configured: {})", self.has_api_key());

        let context = context.trim();
        let context = if context.is_empty() { "n/a" } else { context };
        format!(
            "[openai placeholder] Suggestion for: '{}' (set OPENAI_API_KEY to enable real integration later)",
            context
        )
    }
}
