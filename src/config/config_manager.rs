use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{AWS_REGION_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, PRIMARY_MODEL_ENV};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# PR Review Helper Configuration

[github]
# Base URL of the GitHub REST API (change for GitHub Enterprise)
api_base_url = "https://api.github.com"

# Environment variable holding the personal access token
token_env = "GITHUB_TOKEN"

[ai]
provider = "bedrock"
region = "us-east-1"

# Tried first; AMAZON_Q_MODEL_ID overrides it
primary_model = "amazon.titan-code-express-v1"

# Tried in order when the primary model fails
fallback_models = ["amazon.titan-text-express-v1", "anthropic.claude-instant-v1"]

temperature = 0.2
max_tokens = 4096

# Environment variable holding the Bedrock API key
bearer_token_env = "AWS_BEARER_TOKEN_BEDROCK"

[analysis]
# Files per pull request sent to the model
max_files = 5

# Characters per file before truncation
max_file_chars = 10000

[dashboard]
port = 3000
default_days = 30
open_browser = false
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config file if present, then applies environment overrides.
    pub fn load() -> ReviewResult<Config> {
        let mut config = Self::load_from(&Self::config_path())?;
        Self::apply_env_overrides(&mut config, |name| env::var(name).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> ReviewResult<Config> {
        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        log::debug!("No config file at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(&config.github.token_env) {
            config.github.token = Some(token);
        }
        if let Some(token) = non_empty(&config.ai.bearer_token_env) {
            config.ai.bearer_token = Some(token);
        }
        if let Some(region) = non_empty(AWS_REGION_ENV) {
            config.ai.region = region;
        }
        if let Some(model) = non_empty(PRIMARY_MODEL_ENV) {
            config.ai.primary_model = model;
        }
    }

    pub fn create_sample_config() -> ReviewResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> ReviewResult<()> {
        if path.exists() {
            return Err(ReviewError::config_error(
                &format!("Configuration already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it before running init again"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.model_chain().is_empty() {
            errors.push("At least one model identifier must be configured in [ai]".to_string());
        }

        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than zero".to_string());
        }

        if !(0.0..=1.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be between 0 and 1, got {}", config.ai.temperature));
        }

        if config.analysis.max_files == 0 {
            errors.push("analysis.max_files must be greater than zero".to_string());
        }

        if config.analysis.max_file_chars == 0 {
            errors.push("analysis.max_file_chars must be greater than zero".to_string());
        }

        for (field, url) in [("github.api_base_url", Some(&config.github.api_base_url)), ("ai.endpoint", config.ai.endpoint.as_ref())] {
            if let Some(url) = url {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    errors.push(format!("{} must be an http(s) URL: {}", field, url));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.analysis.max_files, 5);
        assert_eq!(config.analysis.max_file_chars, 10_000);
        assert_eq!(config.ai.primary_model, "amazon.titan-code-express-v1");
    }

    #[test]
    fn sample_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pr-review").join("config.toml");
        ConfigManager::write_sample_config(&path).unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.ai.fallback_models.len(), 2);
        assert_eq!(config.dashboard.port, 3000);

        assert!(ConfigManager::write_sample_config(&path).is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("GITHUB_TOKEN", "ghp_test"),
            ("AWS_BEARER_TOKEN_BEDROCK", "bedrock-key"),
            ("AWS_REGION", "eu-central-1"),
            ("AMAZON_Q_MODEL_ID", "custom.model-v1"),
        ]);
        let mut config = Config::default();
        ConfigManager::apply_env_overrides(&mut config, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.github.token.as_deref(), Some("ghp_test"));
        assert_eq!(config.ai.bearer_token.as_deref(), Some("bedrock-key"));
        assert_eq!(config.ai.region, "eu-central-1");
        assert_eq!(config.ai.model_chain()[0], "custom.model-v1");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = Config::default();
        ConfigManager::apply_env_overrides(&mut config, |_| Some("  ".to_string()));
        assert!(config.github.token.is_none());
        assert_eq!(config.ai.region, "us-east-1");
    }

    #[test]
    fn validation_reports_every_problem() {
        let mut config = Config::default();
        config.ai.max_tokens = 0;
        config.analysis.max_files = 0;
        config.github.api_base_url = "ftp://example.com".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3, "{errors:?}");
    }

    #[test]
    fn primary_override_matching_a_fallback_is_valid() {
        let mut config = Config::default();
        let fallback = config.ai.fallback_models[0].clone();
        ConfigManager::apply_env_overrides(&mut config, |name| {
            (name == "AMAZON_Q_MODEL_ID").then(|| fallback.clone())
        });

        assert!(ConfigManager::validate_config(&config).is_ok());
        let chain = config.ai.model_chain();
        assert_eq!(chain[0], fallback);
        assert_eq!(chain.iter().filter(|id| **id == fallback).count(), 1);
    }
}
