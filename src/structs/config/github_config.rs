use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitHubConfig {
    #[serde(default = "ConfigHelper::default_github_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "ConfigHelper::default_github_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,

    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: ConfigHelper::default_github_api_base_url(),
            token_env: ConfigHelper::default_github_token_env(),
            user_agent: ConfigHelper::default_user_agent(),
            token: None,
        }
    }
}
