use crate::config::constants::{MAX_RISKY_FILE_FALLBACK, SUMMARY_PLACEHOLDER};
use crate::services::response_extractor::ResponseExtractor;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::partial_analysis::PartialAnalysis;

/// Fills every gap in a [`PartialAnalysis`] so callers always get all five fields.
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn normalize(partial: PartialAnalysis, submitted_files: &[String]) -> AnalysisResult {
        let summary = match partial.summary {
            Some(summary) if !summary.trim().is_empty() => summary,
            _ => SUMMARY_PLACEHOLDER.to_string(),
        };

        let risky_files = non_empty(partial.risky_files).unwrap_or_else(|| {
            submitted_files
                .iter()
                .take(MAX_RISKY_FILE_FALLBACK)
                .cloned()
                .collect()
        });

        AnalysisResult {
            summary,
            risky_files,
            complex_functions: non_empty(partial.complex_functions).unwrap_or_default(),
            refactoring_suggestions: non_empty(partial.refactoring_suggestions).unwrap_or_default(),
            security_issues: non_empty(partial.security_issues).unwrap_or_default(),
        }
    }

    /// Extract then normalize in one step.
    pub fn normalize_text(raw: &str, submitted_files: &[String]) -> AnalysisResult {
        Self::normalize(ResponseExtractor::extract(raw), submitted_files)
    }
}

fn non_empty(items: Option<Vec<String>>) -> Option<Vec<String>> {
    items.filter(|items| !items.is_empty())
}
