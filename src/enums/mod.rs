pub mod ai_provider_error;
pub mod analysis_source;
pub mod attempt_outcome;
pub mod commands;
pub mod metric_kind;
