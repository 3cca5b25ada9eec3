pub const MAX_FILES_TO_ANALYZE: usize = 5;
pub const MAX_FILE_CONTENT_CHARS: usize = 10_000;
pub const TRUNCATION_MARKER: &str = "\n... (content truncated) ...";
pub const CONTENT_UNAVAILABLE: &str = "(Content not available)";
pub const MAX_REMOTE_FILE_BYTES: u64 = 1_000_000;
pub const MAX_RISKY_FILE_FALLBACK: usize = 3;

pub const DEFAULT_PRIMARY_MODEL: &str = "amazon.titan-code-express-v1";
pub const DEFAULT_FALLBACK_MODELS: &[&str] = &[
    "amazon.titan-text-express-v1",
    "anthropic.claude-instant-v1",
];
pub const DEFAULT_REGION: &str = "us-east-1";

pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const GITHUB_FILES_PER_PAGE: u32 = 100;

pub const DEFAULT_DASHBOARD_PORT: u16 = 3000;
pub const DEFAULT_SERIES_DAYS: u32 = 30;
pub const MAX_SERIES_DAYS: u32 = 365;

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const BEDROCK_BEARER_TOKEN_ENV: &str = "AWS_BEARER_TOKEN_BEDROCK";
pub const AWS_REGION_ENV: &str = "AWS_REGION";
pub const PRIMARY_MODEL_ENV: &str = "AMAZON_Q_MODEL_ID";

pub const SUMMARY_PLACEHOLDER: &str = "Analysis completed, but summary could not be generated.";
pub const COMMENT_FOOTER: &str = "_This review was automatically generated by PR Review Helper._";

pub const CONFIG_DIR_NAME: &str = "pr-review";
pub const CONFIG_FILE_NAME: &str = "config.toml";
