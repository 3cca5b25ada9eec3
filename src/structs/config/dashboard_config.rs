use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "ConfigHelper::default_dashboard_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_series_days")]
    pub default_days: u32,

    #[serde(default)]
    pub open_browser: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: ConfigHelper::default_dashboard_port(),
            default_days: ConfigHelper::default_series_days(),
            open_browser: false,
        }
    }
}
