pub mod ai_provider;
pub mod hosting_provider;
