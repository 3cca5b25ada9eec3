use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::ai::bedrock::bedrock_request::BedrockRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Amazon Bedrock runtime `InvokeModel` over HTTPS with a Bedrock API key.
#[derive(Clone)]
pub struct BedrockProvider {
    bearer_token: String,
    base_url: String,
    client: Client,
    temperature: f32,
    max_tokens: u32,
}

impl BedrockProvider {
    pub fn new(bearer_token: String, base_url: String) -> Self {
        Self {
            bearer_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            temperature: 0.2,
            max_tokens: 4096,
        }
    }

    pub fn from_config(config: &AiConfig) -> ReviewResult<Self> {
        let token = config
            .bearer_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ReviewError::credential_missing(&config.bearer_token_env, "model invocation"))?;

        Ok(Self::new(token, config.endpoint_url()).with_generation(config.temperature, config.max_tokens))
    }

    pub fn with_generation(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    fn invoke_url(&self, model_id: &str) -> Result<Url, AiProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AiProviderError::ValidationError(format!("Invalid endpoint '{}': {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| AiProviderError::ValidationError(format!("Endpoint '{}' cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(["model", model_id, "invoke"]);

        Ok(url)
    }

    /// Pulls the generated text out of the model family's response shape.
    pub fn extract_text(body: &Value) -> Option<String> {
        let candidates = [
            body.get("completion"),
            body.pointer("/results/0/outputText"),
            body.pointer("/content/0/text"),
            body.get("outputText"),
            body.get("generation"),
        ];

        candidates
            .into_iter()
            .flatten()
            .find_map(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

#[async_trait]
impl AiProvider for BedrockProvider {
    async fn invoke(&self, model_id: &str, prompt: &str) -> Result<String, AiProviderError> {
        let url = self.invoke_url(model_id)?;
        let request = BedrockRequest {
            prompt: prompt.to_string(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        log::debug!("📦 Invoking {} ({} prompt chars)", model_id, prompt.len());

        let response = self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_type = response
                .headers()
                .get("x-amzn-errortype")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string());
            let body = response.text().await.unwrap_or_default();
            return Err(AiProviderError::from_response(status.as_u16(), error_type.as_deref(), body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_text(&body).ok_or_else(|| {
            AiProviderError::SerializationError(format!("No generated text in response from {}", model_id))
        })
    }
}
