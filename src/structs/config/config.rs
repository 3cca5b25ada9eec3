use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::config::dashboard_config::DashboardConfig;
use crate::structs::config::github_config::GitHubConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}
