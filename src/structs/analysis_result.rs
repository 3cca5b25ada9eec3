use serde::{Deserialize, Serialize};

/// The normalized review record handed to the CLI, dashboard and comment renderer.
///
/// Every field is always populated; see `ResponseNormalizer` for the fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub risky_files: Vec<String>,
    pub complex_functions: Vec<String>,
    pub refactoring_suggestions: Vec<String>,
    pub security_issues: Vec<String>,
}
