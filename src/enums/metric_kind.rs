use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Quality,
    Complexity,
    Issues,
}

impl MetricKind {
    /// JSON key the dashboard charts expect for a time-series value.
    pub fn value_key(&self) -> &'static str {
        match self {
            MetricKind::Quality => "score",
            MetricKind::Complexity => "complexity",
            MetricKind::Issues => "count",
        }
    }

    pub fn is_series(&self) -> bool {
        !matches!(self, MetricKind::Issues)
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quality" => Ok(MetricKind::Quality),
            "complexity" => Ok(MetricKind::Complexity),
            "issues" => Ok(MetricKind::Issues),
            other => Err(format!("Invalid metric type: {}", other)),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricKind::Quality => "quality",
            MetricKind::Complexity => "complexity",
            MetricKind::Issues => "issues",
        };
        write!(f, "{}", name)
    }
}
