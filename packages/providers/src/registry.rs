// ABOUTME: Provider registry service
// ABOUTME: Resolves suggestion providers by name with a recognizable error for unknown names

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::{LocalProvider, OpenAiProvider, Provider};

pub const DEFAULT_PROVIDER: &str = "local";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Unknown provider: {0}")]
    Unknown(String),
}

#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<&'static str, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `local` and `openai` providers
    pub fn with_defaults(openai_api_key: Option<String>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LocalProvider::new()));
        registry.register(Arc::new(OpenAiProvider::new(openai_api_key)));
        registry
    }

    /// Add a provider, replacing any provider registered under the same name
    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        self.providers.insert(provider.name(), provider);
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Provider>, ProviderError> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::Unknown(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered provider names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.providers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct ShoutingProvider;

    #[async_trait]
    impl Provider for ShoutingProvider {
        fn name(&self) -> &'static str {
            "local"
        }

        async fn suggest(&self, context: &str) -> String {
            context.to_uppercase()
        }
    }

    #[test]
    fn test_default_names_sorted() {
        let registry = ProviderRegistry::with_defaults(None);
        assert_eq!(registry.names(), vec!["local", "openai"]);
        assert!(registry.contains(DEFAULT_PROVIDER));
    }

    #[test]
    fn test_unknown_provider() {
        let registry = ProviderRegistry::with_defaults(None);
        let err = registry.resolve("gemini").err().unwrap();
        assert_eq!(err, ProviderError::Unknown("gemini".to_string()));
        assert_eq!(err.to_string(), "Unknown provider: gemini");
    }

    #[tokio::test]
    async fn test_resolve_and_suggest() {
        let registry = ProviderRegistry::with_defaults(None);
        let provider = registry.resolve("openai").unwrap();
        assert_eq!(provider.name(), "openai");
        assert!(provider.suggest("towels").await.contains("towels"));
    }

    #[tokio::test]
    async fn test_register_replaces_existing() {
        let mut registry = ProviderRegistry::with_defaults(None);
        registry.register(Arc::new(ShoutingProvider));

        let provider = registry.resolve("local").unwrap();
        assert_eq!(provider.suggest("wool").await, "WOOL");
        assert_eq!(registry.names().len(), 2);
    }
}
