use crate::config::constants::{
    BEDROCK_BEARER_TOKEN_ENV, DEFAULT_DASHBOARD_PORT, DEFAULT_FALLBACK_MODELS, DEFAULT_GITHUB_API_BASE_URL,
    DEFAULT_PRIMARY_MODEL, DEFAULT_REGION, DEFAULT_SERIES_DAYS, GITHUB_TOKEN_ENV, MAX_FILES_TO_ANALYZE,
    MAX_FILE_CONTENT_CHARS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "bedrock".to_string()
    }

    pub fn default_region() -> String {
        DEFAULT_REGION.to_string()
    }

    pub fn default_primary_model() -> String {
        DEFAULT_PRIMARY_MODEL.to_string()
    }

    pub fn default_fallback_models() -> Vec<String> {
        DEFAULT_FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
    }

    pub fn default_temperature() -> f32 {
        0.2
    }

    pub fn default_max_tokens() -> u32 {
        4096
    }

    pub fn default_bearer_token_env() -> String {
        BEDROCK_BEARER_TOKEN_ENV.to_string()
    }

    pub fn default_github_api_base_url() -> String {
        DEFAULT_GITHUB_API_BASE_URL.to_string()
    }

    pub fn default_github_token_env() -> String {
        GITHUB_TOKEN_ENV.to_string()
    }

    pub fn default_user_agent() -> String {
        format!("pr-review-helper/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn default_max_files() -> usize {
        MAX_FILES_TO_ANALYZE
    }

    pub fn default_max_file_chars() -> usize {
        MAX_FILE_CONTENT_CHARS
    }

    pub fn default_dashboard_port() -> u16 {
        DEFAULT_DASHBOARD_PORT
    }

    pub fn default_series_days() -> u32 {
        DEFAULT_SERIES_DAYS
    }
}
