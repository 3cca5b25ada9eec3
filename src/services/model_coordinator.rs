use std::sync::Arc;
use crate::enums::attempt_outcome::AttemptOutcome;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::model_attempt::ModelAttempt;
use crate::structs::model_response::ModelResponse;
use crate::traits::ai_provider::AiProvider;

/// Tries each configured model in order and returns the first successful payload.
///
/// Attempts are strictly sequential. A failed identifier is never retried within
/// one call, and there is no backoff between identifiers.
pub struct ModelCoordinator {
    provider: Arc<dyn AiProvider>,
    models: Vec<String>,
}

impl ModelCoordinator {
    pub fn new(provider: Arc<dyn AiProvider>, models: Vec<String>) -> Self {
        Self { provider, models }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub async fn invoke(&self, prompt: &str) -> ReviewResult<ModelResponse> {
        let (result, attempts) = self.invoke_recorded(prompt).await;
        log::debug!(
            "Model invocation finished after {} attempt(s), {} failed",
            attempts.len(),
            attempts.iter().filter(|a| !a.succeeded()).count()
        );
        result
    }

    /// Same as [`invoke`](Self::invoke) but also hands back the attempt log.
    pub async fn invoke_recorded(&self, prompt: &str) -> (ReviewResult<ModelResponse>, Vec<ModelAttempt>) {
        let mut attempts: Vec<ModelAttempt> = Vec::with_capacity(self.models.len());

        if self.models.is_empty() {
            let error = ReviewError::config_error(
                "No model identifiers configured",
                Some("ai.primary_model"),
                Some("Set ai.primary_model or AMAZON_Q_MODEL_ID"),
            );
            return (Err(error), attempts);
        }

        for (index, model_id) in self.models.iter().enumerate() {
            if index == 0 {
                log::info!("🤖 Using model: {}", model_id);
            } else {
                log::info!("🔁 Trying fallback model: {}", model_id);
            }

            match self.provider.invoke(model_id, prompt).await {
                Ok(text) => {
                    if index > 0 {
                        log::info!("✅ Successfully used fallback model: {}", model_id);
                    } else {
                        log::info!("✅ Model {} responded", model_id);
                    }
                    attempts.push(ModelAttempt {
                        model_id: model_id.clone(),
                        outcome: AttemptOutcome::Success(text.clone()),
                    });
                    return (Ok(ModelResponse { model_id: model_id.clone(), text }), attempts);
                }
                Err(e) => {
                    log::warn!("⚠️ Model {} failed: {}", model_id, e);
                    if let Some(hint) = e.guidance() {
                        log::warn!("💡 {}", hint);
                    }
                    attempts.push(ModelAttempt {
                        model_id: model_id.clone(),
                        outcome: AttemptOutcome::Failure(ReviewError::invocation_failure(model_id, &e.to_string())),
                    });
                }
            }
        }

        let (last_model, last_reason) = match attempts.last() {
            Some(ModelAttempt { outcome: AttemptOutcome::Failure(ReviewError::InvocationFailure { model_id, reason }), .. }) => {
                (model_id.clone(), reason.clone())
            }
            _ => (String::new(), String::new()),
        };

        log::error!("❌ All {} configured models failed", attempts.len());

        let error = ReviewError::AllModelsExhausted {
            attempted: attempts.len(),
            last_model,
            last_reason,
        };
        (Err(error), attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::traits::ai_provider::MockAiProvider;

    fn models(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[tokio::test]
    async fn returns_first_success_after_two_failures() {
        let mut provider = MockAiProvider::new();
        let mut seq = Sequence::new();
        provider.expect_invoke()
            .with(eq("A"), eq("prompt"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(AiProviderError::Throttled("busy".to_string())));
        provider.expect_invoke()
            .with(eq("B"), eq("prompt"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(AiProviderError::AccessDenied("no access".to_string())));
        provider.expect_invoke()
            .with(eq("C"), eq("prompt"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok("from C".to_string()));

        let coordinator = ModelCoordinator::new(Arc::new(provider), models(&["A", "B", "C"]));
        let (result, attempts) = coordinator.invoke_recorded("prompt").await;

        let response = result.unwrap();
        assert_eq!(response.model_id, "C");
        assert_eq!(response.text, "from C");

        let failures: Vec<&ModelAttempt> = attempts.iter().filter(|a| !a.succeeded()).collect();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].model_id, "A");
        assert_eq!(failures[1].model_id, "B");
        match &failures[1].outcome {
            AttemptOutcome::Failure(ReviewError::InvocationFailure { model_id, reason }) => {
                assert_eq!(model_id, "B");
                assert!(reason.contains("no access"), "{reason}");
            }
            other => panic!("expected InvocationFailure, got {:?}", other),
        }
        assert!(attempts[2].succeeded());
    }

    #[tokio::test]
    async fn stops_at_primary_when_it_succeeds() {
        let mut provider = MockAiProvider::new();
        provider.expect_invoke()
            .with(eq("A"), eq("prompt"))
            .times(1)
            .returning(|_, _| Ok("from A".to_string()));

        let coordinator = ModelCoordinator::new(Arc::new(provider), models(&["A", "B"]));
        let response = coordinator.invoke("prompt").await.unwrap();
        assert_eq!(response.model_id, "A");
    }

    #[tokio::test]
    async fn exhaustion_carries_last_failure_and_tries_each_once() {
        let mut provider = MockAiProvider::new();
        for id in ["A", "B", "C"] {
            provider.expect_invoke()
                .with(eq(id), eq("prompt"))
                .times(1)
                .returning(move |model, _| Err(AiProviderError::ValidationError(format!("{} unknown", model))));
        }

        let coordinator = ModelCoordinator::new(Arc::new(provider), models(&["A", "B", "C"]));
        let (result, attempts) = coordinator.invoke_recorded("prompt").await;

        assert_eq!(attempts.len(), 3);
        match result {
            Err(ReviewError::AllModelsExhausted { attempted, last_model, last_reason }) => {
                assert_eq!(attempted, 3);
                assert_eq!(last_model, "C");
                assert!(last_reason.contains("C unknown"));
                assert!(!last_reason.contains("A unknown"));
            }
            other => panic!("expected AllModelsExhausted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_model_list_is_a_configuration_error() {
        let provider = MockAiProvider::new();
        let coordinator = ModelCoordinator::new(Arc::new(provider), Vec::new());
        let (result, attempts) = coordinator.invoke_recorded("prompt").await;
        assert!(attempts.is_empty());
        assert!(matches!(result, Err(ReviewError::ConfigurationError { .. })));
    }
}
