use std::sync::Arc;
use crate::enums::analysis_source::AnalysisSource;
use crate::errors::{ReviewError, ReviewResult};
use crate::helpers::prompt_generator::{build_code_content, generate_prompt};
use crate::services::ai_providers::bedrock::BedrockProvider;
use crate::services::hosting::github::GitHubClient;
use crate::services::mock_generator::MockGenerator;
use crate::services::model_coordinator::ModelCoordinator;
use crate::services::response_extractor::ResponseExtractor;
use crate::services::response_normalizer::ResponseNormalizer;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;
use crate::traits::hosting_provider::HostingProvider;

/// Why live analysis was abandoned, plus whatever file names were known by then.
struct Degraded {
    error: ReviewError,
    file_names: Vec<String>,
}

/// Fetch files, prompt the model, normalize the reply. Any failure on that path
/// turns into a mock analysis, so `analyze` always produces a result.
pub struct ReviewOrchestrator {
    host: Arc<dyn HostingProvider>,
    coordinator: ReviewResult<ModelCoordinator>,
    limits: AnalysisConfig,
}

impl ReviewOrchestrator {
    pub fn new(host: Arc<dyn HostingProvider>, coordinator: ReviewResult<ModelCoordinator>, limits: AnalysisConfig) -> Self {
        Self { host, coordinator, limits }
    }

    /// GitHub client plus Bedrock coordinator. A missing Bedrock key is not an
    /// error here; every analysis just degrades to mock data.
    pub fn from_config(config: &Config) -> ReviewResult<Self> {
        let host: Arc<dyn HostingProvider> = Arc::new(GitHubClient::new(&config.github)?);

        let coordinator = BedrockProvider::from_config(&config.ai).map(|provider| {
            let provider: Arc<dyn AiProvider> = Arc::new(provider);
            ModelCoordinator::new(provider, config.ai.model_chain())
        });

        if let Err(e) = &coordinator {
            log::warn!("⚠️ {}", e);
            log::warn!("💡 Set {} to enable live analysis. Mock data will be used instead.", config.ai.bearer_token_env);
        }

        Ok(Self::new(host, coordinator, config.analysis.clone()))
    }

    pub fn host(&self) -> Arc<dyn HostingProvider> {
        Arc::clone(&self.host)
    }

    pub fn has_model(&self) -> bool {
        self.coordinator.is_ok()
    }

    pub async fn analyze(&self, owner: &str, repo: &str, pr_number: u64) -> AnalysisResult {
        self.analyze_detailed(owner, repo, pr_number).await.result
    }

    pub async fn analyze_detailed(&self, owner: &str, repo: &str, pr_number: u64) -> AnalysisReport {
        match self.live_analysis(owner, repo, pr_number).await {
            Ok(report) => report,
            Err(degraded) => {
                log::warn!("⚠️ Falling back to mock data: {}", degraded.error);
                let mock = MockGenerator::analysis(pr_number, &degraded.file_names);
                AnalysisReport {
                    result: mock.result,
                    source: AnalysisSource::Mock { reason: degraded.error.to_string() },
                    scores: Some(mock.scores),
                }
            }
        }
    }

    async fn live_analysis(&self, owner: &str, repo: &str, pr_number: u64) -> Result<AnalysisReport, Degraded> {
        let files = self
            .host
            .fetch_files(owner, repo, pr_number)
            .await
            .map_err(|error| Degraded { error, file_names: Vec::new() })?;

        let files: Vec<_> = files.into_iter().take(self.limits.max_files).collect();
        let file_names: Vec<String> = files.iter().map(|f| f.filename.clone()).collect();

        let coordinator = match &self.coordinator {
            Ok(coordinator) => coordinator,
            Err(error) => return Err(Degraded { error: error.clone(), file_names }),
        };

        let code = build_code_content(owner, repo, pr_number, &files, self.limits.max_file_chars);
        let prompt = generate_prompt(&code);

        let response = match coordinator.invoke(&prompt).await {
            Ok(response) => response,
            Err(error) => return Err(Degraded { error, file_names }),
        };

        let partial = ResponseExtractor::extract(&response.text);
        if partial.found_fields() < 5 {
            log::info!("🔎 Model reply carried {}/5 fields, filling the rest with defaults", partial.found_fields());
        }

        Ok(AnalysisReport {
            result: ResponseNormalizer::normalize(partial, &file_names),
            source: AnalysisSource::Model { model_id: response.model_id },
            scores: None,
        })
    }
}
