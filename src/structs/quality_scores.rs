use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScores {
    pub complexity_score: u32,
    pub test_coverage: u32,
    pub code_style_score: u32,
}
