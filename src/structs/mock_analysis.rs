use crate::structs::analysis_result::AnalysisResult;
use crate::structs::quality_scores::QualityScores;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAnalysis {
    pub result: AnalysisResult,
    pub scores: QualityScores,
}
