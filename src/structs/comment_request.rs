use serde::Deserialize;
use crate::structs::analysis_result::AnalysisResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub owner: String,
    pub repo: String,
    pub pr_number: u64,
    pub analysis: AnalysisResult,
}
