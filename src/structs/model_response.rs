#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub model_id: String,
    pub text: String,
}
