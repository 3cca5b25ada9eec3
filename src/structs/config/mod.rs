pub mod ai_config;
pub mod analysis_config;
pub mod config;
pub mod dashboard_config;
pub mod github_config;
