pub mod ai;
pub mod analysis_report;
pub mod analysis_result;
pub mod analyze_request;
pub mod cli;
pub mod comment_request;
pub mod config;
pub mod github;
pub mod issue_count;
pub mod metric_point;
pub mod mock_analysis;
pub mod model_attempt;
pub mod model_response;
pub mod partial_analysis;
pub mod pr_file;
pub mod pull_request;
pub mod quality_scores;
pub mod repo_ref;
