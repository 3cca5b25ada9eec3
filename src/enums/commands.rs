use clap::Subcommand;
use crate::config::constants::DEFAULT_SERIES_DAYS;
use crate::enums::metric_kind::MetricKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Analyze open pull requests in a repository
    Analyze {
        /// GitHub repository (owner/repo or GitHub URL)
        repo: String,
        /// Specific PR number to analyze
        #[clap(short, long)]
        pr: Option<u64>,
        /// Automatically post comments to GitHub
        #[clap(short, long)]
        auto_comment: bool,
        /// GitHub personal access token (overrides GITHUB_TOKEN)
        #[clap(short, long)]
        token: Option<String>,
        /// Analyze every open PR without asking
        #[clap(long)]
        all: bool,
    },
    /// Print mock dashboard metrics for a repository
    Metrics {
        repository_id: String,
        #[clap(short, long, value_enum, default_value_t = MetricKind::Quality)]
        kind: MetricKind,
        #[clap(short, long, default_value_t = DEFAULT_SERIES_DAYS)]
        days: u32,
    },
    /// Serve the dashboard API
    Dashboard {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        open: bool,
    },
    /// Check the configuration file
    Validate,
}
