use crate::enums::attempt_outcome::AttemptOutcome;

#[derive(Debug, Clone)]
pub struct ModelAttempt {
    pub model_id: String,
    pub outcome: AttemptOutcome,
}

impl ModelAttempt {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Success(_))
    }
}
