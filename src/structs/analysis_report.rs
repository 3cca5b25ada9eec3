use serde::{Deserialize, Serialize};
use crate::enums::analysis_source::AnalysisSource;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::quality_scores::QualityScores;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub source: AnalysisSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<QualityScores>,
}

impl AnalysisReport {
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, AnalysisSource::Mock { .. })
    }
}
