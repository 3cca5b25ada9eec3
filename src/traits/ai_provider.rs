use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// Transport capability for a hosted text-generation model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn invoke(&self, model_id: &str, prompt: &str) -> Result<String, AiProviderError>;
}
