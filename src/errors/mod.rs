use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    // Hosting provider errors
    #[error("Failed to fetch files for {repository}#{pr_number}: {reason}")]
    FetchError {
        repository: String,
        pr_number: u64,
        reason: String,
    },

    #[error("Authentication failed during {operation}: {reason}")]
    AuthError {
        operation: String,
        reason: String,
    },

    #[error("Permission denied during {operation}: {reason}")]
    PermissionError {
        operation: String,
        reason: String,
    },

    #[error("Not found during {operation}: {resource}")]
    NotFoundError {
        operation: String,
        resource: String,
    },

    // Model invocation errors
    #[error("Model '{model_id}' failed: {reason}")]
    InvocationFailure {
        model_id: String,
        reason: String,
    },

    #[error("All {attempted} configured models failed, last error from '{last_model}': {last_reason}")]
    AllModelsExhausted {
        attempted: usize,
        last_model: String,
        last_reason: String,
    },

    #[error("Could not parse {content_type}: {reason}")]
    ParseFailure {
        content_type: String,
        reason: String,
    },

    #[error("Missing credential '{name}' required for {purpose}")]
    CredentialMissing {
        name: String,
        purpose: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    // Network/API errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // User input errors
    #[error("Invalid input '{input}': expected {expected}")]
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ReviewError {
    pub fn fetch_error(repository: &str, pr_number: u64, reason: &str) -> Self {
        Self::FetchError {
            repository: repository.to_string(),
            pr_number,
            reason: reason.to_string(),
        }
    }

    pub fn invocation_failure(model_id: &str, reason: &str) -> Self {
        Self::InvocationFailure {
            model_id: model_id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_failure(content_type: &str, reason: &str) -> Self {
        Self::ParseFailure {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn credential_missing(name: &str, purpose: &str) -> Self {
        Self::CredentialMissing {
            name: name.to_string(),
            purpose: purpose.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Errors the orchestrator absorbs by degrading to mock data.
    pub fn degrades_to_mock(&self) -> bool {
        matches!(
            self,
            Self::FetchError { .. }
                | Self::InvocationFailure { .. }
                | Self::AllModelsExhausted { .. }
                | Self::ParseFailure { .. }
                | Self::CredentialMissing { .. }
        )
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::UserInputError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::CredentialMissing { .. } => true,
            Self::AuthError { .. } => true,
            Self::SystemError { .. } => false,
            Self::NotFoundError { .. } => false,
            Self::PermissionError { .. } => false,
            other => other.degrades_to_mock(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::AuthError { .. } => ErrorSeverity::High,
            Self::PermissionError { .. } => ErrorSeverity::High,
            Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::AllModelsExhausted { .. } => ErrorSeverity::Medium,
            Self::FetchError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::NotFoundError { .. } => ErrorSeverity::Medium,
            Self::InvocationFailure { .. } => ErrorSeverity::Low,
            Self::ParseFailure { .. } => ErrorSeverity::Low,
            Self::CredentialMissing { .. } => ErrorSeverity::Low,
            Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::FetchError { .. } => {
                format!("{}\n💡 Check the repository name, PR number and your GitHub token", self)
            }
            Self::AuthError { .. } => {
                let mut msg = format!("{}\n💡 Your GitHub token appears to be invalid or expired.", self);
                msg.push_str("\n   - For public repositories: 'public_repo' scope");
                msg.push_str("\n   - For private repositories: 'repo' scope");
                msg.push_str("\n   Generate a new token at: https://github.com/settings/tokens/new");
                msg
            }
            Self::PermissionError { .. } => {
                format!("{}\n💡 For posting comments, ensure your token has 'repo' or 'public_repo' scope", self)
            }
            Self::NotFoundError { .. } => {
                format!("{}\n💡 Check that the repository and pull request exist and that you have access to them", self)
            }
            Self::InvocationFailure { .. } | Self::AllModelsExhausted { .. } => {
                format!("{}\n💡 Check that your account has Amazon Bedrock access to the configured models", self)
            }
            Self::ParseFailure { .. } => self.to_string(),
            Self::CredentialMissing { name, .. } => {
                let mut msg = self.to_string();
                msg.push_str(&format!("\n💡 Set it as an environment variable:\n   export {}=...", name));
                msg
            }
            Self::ConfigurationError { field, suggestion, .. } => {
                let mut msg = self.to_string();
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::NetworkError { url, status_code, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::UserInputError { suggestion, .. } => {
                format!("{}\n💡 {}", self, suggestion)
            }
            Self::SystemError { .. } => {
                format!("{}\n💡 This may require administrator intervention", self)
            }
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for review operations
pub type ReviewResult<T> = Result<T, ReviewError>;

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &ReviewError) {
        let severity = error.severity();

        log::debug!("[{}] {:?}", severity.name(), error);
        log::error!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            log::info!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(error: std::io::Error) -> Self {
        ReviewError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(error: serde_json::Error) -> Self {
        ReviewError::ParseFailure {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(error: toml::de::Error) -> Self {
        ReviewError::ConfigurationError {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Check the TOML syntax of your configuration file".to_string()),
        }
    }
}

impl From<reqwest::Error> for ReviewError {
    fn from(error: reqwest::Error) -> Self {
        ReviewError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
