use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_region")]
    pub region: String,

    /// Overrides `https://bedrock-runtime.{region}.amazonaws.com`.
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "ConfigHelper::default_primary_model")]
    pub primary_model: String,

    #[serde(default = "ConfigHelper::default_fallback_models")]
    pub fallback_models: Vec<String>,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "ConfigHelper::default_bearer_token_env")]
    pub bearer_token_env: String,

    #[serde(skip)]
    pub bearer_token: Option<String>,
}

impl AiConfig {
    /// Primary model followed by the fallbacks, duplicates removed, order kept.
    pub fn model_chain(&self) -> Vec<String> {
        let mut chain: Vec<String> = Vec::with_capacity(self.fallback_models.len() + 1);
        for model in std::iter::once(&self.primary_model).chain(self.fallback_models.iter()) {
            let model = model.trim();
            if !model.is_empty() && !chain.iter().any(|m| m == model) {
                chain.push(model.to_string());
            }
        }
        chain
    }

    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            region: ConfigHelper::default_region(),
            endpoint: None,
            primary_model: ConfigHelper::default_primary_model(),
            fallback_models: ConfigHelper::default_fallback_models(),
            temperature: ConfigHelper::default_temperature(),
            max_tokens: ConfigHelper::default_max_tokens(),
            bearer_token_env: ConfigHelper::default_bearer_token_env(),
            bearer_token: None,
        }
    }
}
