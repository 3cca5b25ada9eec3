pub mod ai_providers;
pub mod comment_formatter;
pub mod hosting;
pub mod mock_generator;
pub mod model_coordinator;
pub mod response_extractor;
pub mod response_normalizer;
pub mod review_orchestrator;
