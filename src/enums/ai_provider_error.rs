use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("Bedrock API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Access Denied: {0}")]
    AccessDenied(String),
    #[error("Validation Error: {0}")]
    ValidationError(String),
    #[error("Service Quota Exceeded: {0}")]
    QuotaExceeded(String),
    #[error("Throttled: {0}")]
    Throttled(String),
}

impl AiProviderError {
    /// Maps an HTTP status and the optional `x-amzn-ErrorType` header to a variant.
    pub fn from_response(status: u16, error_type: Option<&str>, body: String) -> Self {
        let error_type = error_type
            .and_then(|t| t.split(':').next())
            .unwrap_or_default();

        match error_type {
            "AccessDeniedException" => return Self::AccessDenied(body),
            "ValidationException" | "ResourceNotFoundException" => return Self::ValidationError(body),
            "ServiceQuotaExceededException" => return Self::QuotaExceeded(body),
            "ThrottlingException" => return Self::Throttled(body),
            _ => {}
        }

        match status {
            401 => Self::AuthenticationError(body),
            403 => Self::AccessDenied(body),
            400 | 404 => Self::ValidationError(body),
            429 => Self::Throttled(body),
            _ => Self::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }

    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::AccessDenied(_) => Some("Ensure your AWS account has access to Amazon Bedrock and the specified model."),
            Self::ValidationError(_) => Some("Model ID may be incorrect or not accessible. Available models may include amazon.titan-text-express-v1, anthropic.claude-instant-v1, anthropic.claude-v2."),
            Self::QuotaExceeded(_) => Some("You may need to request an increase in your Amazon Bedrock service quotas."),
            Self::Throttled(_) => Some("Try again later or reduce the request rate."),
            Self::AuthenticationError(_) => Some("Check that your Bedrock API key is valid and not expired."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_type_header_wins_over_status() {
        let error = AiProviderError::from_response(400, Some("ThrottlingException:http://internal.amazon.com/"), "slow down".to_string());
        assert!(matches!(error, AiProviderError::Throttled(_)));
    }

    #[test]
    fn falls_back_to_status_code() {
        assert!(matches!(AiProviderError::from_response(401, None, String::new()), AiProviderError::AuthenticationError(_)));
        assert!(matches!(AiProviderError::from_response(500, None, String::new()), AiProviderError::ApiError(_)));
    }
}
