use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use crate::config::constants::MAX_SERIES_DAYS;
use crate::enums::metric_kind::MetricKind;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::issue_count::IssueCount;
use crate::structs::metric_point::MetricPoint;
use crate::structs::mock_analysis::MockAnalysis;
use crate::structs::quality_scores::QualityScores;

const MOCK_SUMMARY: &str = "This pull request introduces several new features with generally good code quality, but there are some areas that could be improved.";

const DEFAULT_RISKY_FILES: [&str; 2] = ["src/components/UserProfile.tsx", "lib/api/auth.ts"];

const MOCK_COMPLEX_FUNCTIONS: [&str; 2] = [
    "processUserData() in UserProfile.tsx - Cyclomatic complexity of 15",
    "validateAuthToken() in auth.ts - Contains nested conditionals that could be simplified",
];

const MOCK_REFACTORING_SUGGESTIONS: [&str; 3] = [
    "Consider breaking down the UserProfile component into smaller, more focused components",
    "The error handling in API calls could be centralized to reduce duplication",
    "Use TypeScript generics for the data fetching functions to improve type safety",
];

const MOCK_SECURITY_ISSUES: [&str; 2] = [
    "Potential XSS vulnerability in user input rendering",
    "API keys should not be stored in client-side code",
];

/// `(name, random upper bound, seed modulus)` for each issue category.
const ISSUE_CATEGORIES: [(&str, u32, u32); 5] = [
    ("Security", 10, 5),
    ("Performance", 15, 7),
    ("Complexity", 20, 10),
    ("Code Style", 25, 12),
    ("Documentation", 18, 8),
];

struct SeriesShape {
    base: f64,
    seed_modulus: u64,
    frequency: f64,
    amplitude: f64,
    jitter: f64,
}

fn series_shape(kind: MetricKind) -> Option<SeriesShape> {
    match kind {
        MetricKind::Quality => Some(SeriesShape { base: 70.0, seed_modulus: 15, frequency: 0.3, amplitude: 5.0, jitter: 3.0 }),
        MetricKind::Complexity => Some(SeriesShape { base: 40.0, seed_modulus: 10, frequency: 0.2, amplitude: 4.0, jitter: 2.5 }),
        MetricKind::Issues => None,
    }
}

/// Deterministic stand-in data for when live analysis is unavailable, plus the
/// synthetic dashboard metrics.
pub struct MockGenerator;

impl MockGenerator {
    /// Sum of the UTF-16 code units of the repository id.
    pub fn repo_seed(repository_id: &str) -> u64 {
        repository_id.encode_utf16().map(u64::from).sum()
    }

    pub fn analysis(pr_number: u64, file_names: &[String]) -> MockAnalysis {
        let risky_files = if file_names.is_empty() {
            DEFAULT_RISKY_FILES.iter().map(|f| f.to_string()).collect()
        } else {
            file_names.iter().take(2).cloned().collect()
        };

        let security_issues = if pr_number % 3 == 0 {
            MOCK_SECURITY_ISSUES.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let result = AnalysisResult {
            summary: MOCK_SUMMARY.to_string(),
            risky_files,
            complex_functions: MOCK_COMPLEX_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            refactoring_suggestions: MOCK_REFACTORING_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            security_issues,
        };

        let scores = QualityScores {
            complexity_score: 35 + (pr_number % 50) as u32,
            test_coverage: 70 - (pr_number % 30) as u32,
            code_style_score: 85,
        };

        MockAnalysis { result, scores }
    }

    /// Starting value of a series before any step is applied. `None` for issue counts.
    pub fn series_base(repository_id: &str, kind: MetricKind) -> Option<f64> {
        let shape = series_shape(kind)?;
        Some(shape.base + (Self::repo_seed(repository_id) % shape.seed_modulus) as f64)
    }

    pub fn series(repository_id: &str, days: u32, kind: MetricKind) -> Vec<MetricPoint> {
        Self::series_with_rng(repository_id, days, kind, Utc::now(), &mut rand::rng())
    }

    /// One point per day from `today - days` up to `today`, oldest first.
    /// `days` is capped at [`MAX_SERIES_DAYS`].
    ///
    /// Each step adds a sine wave plus uniform jitter to the previous value and
    /// clamps the result to 0..=100. Issue counts are not a series and yield nothing.
    pub fn series_with_rng<R: Rng>(
        repository_id: &str,
        days: u32,
        kind: MetricKind,
        today: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<MetricPoint> {
        let (shape, mut value) = match (series_shape(kind), Self::series_base(repository_id, kind)) {
            (Some(shape), Some(base)) => (shape, base),
            _ => return Vec::new(),
        };

        let days = days.min(MAX_SERIES_DAYS);
        let mut points = Vec::with_capacity(days as usize + 1);
        for i in (0..=days).rev() {
            let step = f64::from(i);
            let variation = (step * shape.frequency).sin() * shape.amplitude
                + rng.random_range(-shape.jitter..shape.jitter);
            value = (value + variation).clamp(0.0, 100.0);

            points.push(MetricPoint {
                date: today - Duration::days(i64::from(i)),
                value: value.round() as u32,
            });
        }

        points
    }

    pub fn issue_counts(repository_id: &str) -> Vec<IssueCount> {
        Self::issue_counts_with_rng(repository_id, &mut rand::rng())
    }

    pub fn issue_counts_with_rng<R: Rng>(repository_id: &str, rng: &mut R) -> Vec<IssueCount> {
        let seed = Self::repo_seed(repository_id);

        ISSUE_CATEGORIES
            .iter()
            .map(|(name, bound, modulus)| IssueCount {
                name: name.to_string(),
                count: rng.random_range(0..*bound) + (seed % u64::from(*modulus)) as u32,
            })
            .collect()
    }
}
