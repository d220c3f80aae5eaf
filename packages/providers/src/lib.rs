// ABOUTME: Care suggestion providers for the laundry tracker
// ABOUTME: Provider trait, built-in providers and name-based registry

use async_trait::async_trait;

pub mod local;
pub mod openai;
pub mod registry;

pub use local::LocalProvider;
pub use openai::OpenAiProvider;
pub use registry::{ProviderError, ProviderRegistry, DEFAULT_PROVIDER};

/// A stateless strategy mapping free-text context to a care suggestion
#[async_trait]
pub trait Provider: Send + Sync {
    /// Name used to register and resolve the provider
    fn name(&self) -> &'static str;

    async fn suggest(&self, context: &str) -> String;
}
