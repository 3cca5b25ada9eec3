use terminal_size::{terminal_size, Width};
use crate::enums::analysis_source::AnalysisSource;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::issue_count::IssueCount;
use crate::structs::metric_point::MetricPoint;

const MAX_RULE_WIDTH: usize = 80;

pub struct ReportPrinter {}

impl ReportPrinter {
    fn rule() -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(MAX_RULE_WIDTH)
            .min(MAX_RULE_WIDTH);
        "━".repeat(width)
    }

    fn print_list(title: &str, items: &[String], marker: &str) {
        println!("\n{} ({}):", title, items.len());
        if items.is_empty() {
            println!("  (none)");
        }
        for item in items {
            println!("  {} {}", marker, item);
        }
    }

    pub fn print_analysis_report(repository: &str, pr_number: u64, report: &AnalysisReport) {
        let rule = Self::rule();
        println!("\n{}", rule);
        println!("🔍 PR ANALYSIS REPORT: {}#{}", repository, pr_number);
        println!("{}", rule);

        match &report.source {
            AnalysisSource::Model { model_id } => println!("🤖 Model: {}", model_id),
            AnalysisSource::Mock { reason } => {
                println!("⚠️  Live analysis unavailable, showing mock data");
                println!("    Reason: {}", reason);
            }
        }

        println!("\n📝 Summary:\n  {}", report.result.summary);

        Self::print_list("📁 Risky files", &report.result.risky_files, "•");
        Self::print_list("🧩 Complex functions", &report.result.complex_functions, "•");
        Self::print_list("🔧 Refactoring suggestions", &report.result.refactoring_suggestions, "•");
        Self::print_list("🔒 Security issues", &report.result.security_issues, "⚠️");

        if let Some(scores) = &report.scores {
            println!("\n📊 Scores:");
            println!("  Complexity:    {}", scores.complexity_score);
            println!("  Test coverage: {}%", scores.test_coverage);
            println!("  Code style:    {}", scores.code_style_score);
        }

        println!("{}", rule);
    }

    pub fn print_series(repository_id: &str, label: &str, points: &[MetricPoint]) {
        println!("\n📈 {} for {} ({} points)", label, repository_id, points.len());
        println!("{}", Self::rule());
        for point in points {
            let bar = "▇".repeat((point.value / 2) as usize);
            println!("  {}  {:>3}  {}", point.date.format("%Y-%m-%d"), point.value, bar);
        }
    }

    pub fn print_issue_counts(repository_id: &str, counts: &[IssueCount]) {
        println!("\n🐞 Issues by category for {}", repository_id);
        println!("{}", Self::rule());
        for issue in counts {
            println!("  {:<14} {:>3}", issue.name, issue.count);
        }
    }
}
