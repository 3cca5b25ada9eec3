/// Whatever the extractor managed to recover from a raw model payload.
///
/// `None` means the field was not found at all; `Some(vec![])` means it was
/// found but empty. The normalizer treats both the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialAnalysis {
    pub summary: Option<String>,
    pub risky_files: Option<Vec<String>>,
    pub complex_functions: Option<Vec<String>>,
    pub refactoring_suggestions: Option<Vec<String>>,
    pub security_issues: Option<Vec<String>>,
}

impl PartialAnalysis {
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
            && self.risky_files.is_some()
            && self.complex_functions.is_some()
            && self.refactoring_suggestions.is_some()
            && self.security_issues.is_some()
    }

    pub fn found_fields(&self) -> usize {
        [
            self.summary.is_some(),
            self.risky_files.is_some(),
            self.complex_functions.is_some(),
            self.refactoring_suggestions.is_some(),
            self.security_issues.is_some(),
        ]
        .iter()
        .filter(|found| **found)
        .count()
    }
}
