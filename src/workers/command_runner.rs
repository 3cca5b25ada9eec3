use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::metric_kind::MetricKind;
use crate::errors::{ErrorHandler, ReviewError, ReviewResult};
use crate::helpers::terminal_prompt::{confirm, select_pull_requests};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::comment_formatter::CommentFormatter;
use crate::services::mock_generator::MockGenerator;
use crate::services::review_orchestrator::ReviewOrchestrator;
use crate::structs::config::config::Config;
use crate::structs::repo_ref::RepoRef;
use crate::ui::dashboard_server::DashboardServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReviewResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { repo, pr, auto_comment, token, all } => {
                self.analyze_command(&repo, pr, auto_comment, token, all).await
            }
            Commands::Metrics { repository_id, kind, days } => self.metrics_command(&repository_id, kind, days),
            Commands::Dashboard { port, open } => self.dashboard_command(port, open).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> ReviewResult<()> {
        log::info!("🚀 Initializing pr-review configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔑 Export GITHUB_TOKEN and AWS_BEARER_TOKEN_BEDROCK before analyzing.");
                log::info!("🔧 Run 'pr-review validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> ReviewResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = ConfigManager::load()?;

        if let Err(problems) = ConfigManager::validate_config(&config) {
            for problem in &problems {
                log::error!("   ❌ {}", problem);
            }
            return Err(ReviewError::config_error(
                &format!("{} configuration problem(s) found", problems.len()),
                None,
                Some("Fix the listed fields in your config file"),
            ));
        }

        let configured = 1 + config.ai.fallback_models.len();
        let chain = config.ai.model_chain();
        if chain.len() < configured {
            log::warn!("⚠️ {} blank or duplicate model identifier(s) ignored", configured - chain.len());
        }

        log::info!("✅ Configuration is valid");
        log::info!("🤖 Model chain: {}", chain.join(" → "));

        if config.github.token.is_none() {
            log::warn!("⚠️ {} is not set: public repositories only, comments cannot be posted", config.github.token_env);
        }
        if config.ai.bearer_token.is_none() {
            log::warn!("⚠️ {} is not set: analysis will use mock data", config.ai.bearer_token_env);
        }

        Ok(())
    }

    fn load_config(&self, token: Option<String>) -> ReviewResult<Config> {
        let mut config = ConfigManager::load()?;
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            config.github.token = Some(token);
        }

        if let Err(problems) = ConfigManager::validate_config(&config) {
            return Err(ReviewError::config_error(
                &problems.join("; "),
                None,
                Some("Run 'pr-review validate' for details"),
            ));
        }

        Ok(config)
    }

    async fn analyze_command(
        &self,
        repo: &str,
        pr: Option<u64>,
        auto_comment: bool,
        token: Option<String>,
        all: bool,
    ) -> ReviewResult<()> {
        let repo_ref = RepoRef::parse(repo)?;
        let config = self.load_config(token)?;
        let orchestrator = ReviewOrchestrator::from_config(&config)?;

        let pr_numbers = match pr {
            Some(number) => vec![number],
            None => self.choose_pull_requests(&orchestrator, &repo_ref, all).await?,
        };

        if pr_numbers.is_empty() {
            log::info!("📭 No pull requests to analyze in {}", repo_ref);
            return Ok(());
        }

        let total = pr_numbers.len();
        for (index, pr_number) in pr_numbers.into_iter().enumerate() {
            let mut spinner = AnimatedLogger::new(format!("🔍 Analyzing {}#{}", repo_ref, pr_number));
            spinner.start();
            if total > 1 {
                spinner.update(&format!("🔍 Analyzing {}#{} ({}/{})", repo_ref, pr_number, index + 1, total));
            }

            let report = orchestrator.analyze_detailed(&repo_ref.owner, &repo_ref.repo, pr_number).await;

            if report.is_degraded() {
                spinner.error(&format!("Live analysis failed for #{}, using mock data", pr_number)).await;
            } else {
                spinner.stop(&format!("Analysis of #{} complete", pr_number)).await;
            }

            ReportPrinter::print_analysis_report(&repo_ref.id(), pr_number, &report);

            let should_comment = auto_comment || confirm(&format!("💬 Post this analysis as a comment on PR #{}?", pr_number))?;
            if should_comment {
                let body = CommentFormatter::render(&report.result);
                if let Err(e) = orchestrator.host().post_comment(&repo_ref.owner, &repo_ref.repo, pr_number, &body).await {
                    ErrorHandler::handle_error(&e);
                }
            }
        }

        Ok(())
    }

    async fn choose_pull_requests(&self, orchestrator: &ReviewOrchestrator, repo_ref: &RepoRef, all: bool) -> ReviewResult<Vec<u64>> {
        let mut spinner = AnimatedLogger::new(format!("📋 Fetching open pull requests for {}", repo_ref));
        spinner.start();

        let pulls = match orchestrator.host().list_pull_requests(&repo_ref.owner, &repo_ref.repo).await {
            Ok(pulls) => {
                spinner.stop(&format!("Found {} open pull requests", pulls.len())).await;
                pulls
            }
            Err(e) => {
                spinner.error("Could not list pull requests").await;
                return Err(e);
            }
        };

        if all || pulls.len() <= 1 {
            return Ok(pulls.iter().map(|p| p.number).collect());
        }

        select_pull_requests(&pulls)
    }

    fn metrics_command(&self, repository_id: &str, kind: MetricKind, days: u32) -> ReviewResult<()> {
        if repository_id.trim().is_empty() {
            return Err(ReviewError::user_input_error(repository_id, "a repository id", "Pass something like 'owner/repo'"));
        }

        match kind {
            MetricKind::Issues => {
                ReportPrinter::print_issue_counts(repository_id, &MockGenerator::issue_counts(repository_id));
            }
            series_kind => {
                let points = MockGenerator::series(repository_id, days, series_kind);
                ReportPrinter::print_series(repository_id, &format!("Mock {} trend", series_kind), &points);
            }
        }

        Ok(())
    }

    async fn dashboard_command(&self, port: Option<u16>, open: bool) -> ReviewResult<()> {
        let config = self.load_config(None)?;
        let orchestrator = Arc::new(ReviewOrchestrator::from_config(&config)?);

        let port = port.unwrap_or(config.dashboard.port);
        let server = DashboardServer::new(orchestrator, config.dashboard.default_days);
        server.run(port, open || config.dashboard.open_browser).await
    }
}
