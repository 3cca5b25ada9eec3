use crate::config::constants::COMMENT_FOOTER;
use crate::structs::analysis_result::AnalysisResult;

/// Renders an analysis as the markdown body of a pull request comment.
pub struct CommentFormatter;

impl CommentFormatter {
    pub fn render(analysis: &AnalysisResult) -> String {
        let mut body = format!("## Automated Code Review\n\n{}\n\n", analysis.summary);

        push_section(&mut body, "Complex Functions", &analysis.complex_functions, "");
        push_section(&mut body, "Refactoring Suggestions", &analysis.refactoring_suggestions, "");
        push_section(&mut body, "Security Concerns", &analysis.security_issues, "⚠️ ");

        body.push_str("---\n");
        body.push_str(COMMENT_FOOTER);
        body
    }
}

fn push_section(body: &mut String, title: &str, items: &[String], prefix: &str) {
    if items.is_empty() {
        return;
    }

    body.push_str(&format!("### {}\n\n", title));
    for item in items {
        body.push_str(&format!("- {}{}\n", prefix, item));
    }
    body.push('\n');
}
