use crate::errors::ReviewError;

#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    Success(String),
    Failure(ReviewError),
}
