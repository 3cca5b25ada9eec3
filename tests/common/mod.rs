use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use pr_review_helper::enums::ai_provider_error::AiProviderError;
use pr_review_helper::errors::{ReviewError, ReviewResult};
use pr_review_helper::structs::pr_file::PrFile;
use pr_review_helper::structs::pull_request::PullRequest;
use pr_review_helper::traits::ai_provider::AiProvider;
use pr_review_helper::traits::hosting_provider::HostingProvider;

/// Hosting provider that serves a fixed file list, or a fetch failure.
pub struct FakeHost {
    files: ReviewResult<Vec<PrFile>>,
    pub comments: Mutex<Vec<(u64, String)>>,
}

impl FakeHost {
    pub fn with_files(names: &[&str]) -> Self {
        let files = names
            .iter()
            .map(|name| PrFile {
                filename: name.to_string(),
                status: "modified".to_string(),
                content: Some(format!("// contents of {}\n", name)),
            })
            .collect();
        Self { files: Ok(files), comments: Mutex::new(Vec::new()) }
    }

    pub fn with_contents(files: Vec<(&str, String)>) -> Self {
        let files = files
            .into_iter()
            .map(|(name, content)| PrFile {
                filename: name.to_string(),
                status: "modified".to_string(),
                content: Some(content),
            })
            .collect();
        Self { files: Ok(files), comments: Mutex::new(Vec::new()) }
    }

    pub fn failing(repository: &str, pr_number: u64) -> Self {
        Self {
            files: Err(ReviewError::fetch_error(repository, pr_number, "connection refused")),
            comments: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HostingProvider for FakeHost {
    async fn list_pull_requests(&self, _owner: &str, _repo: &str) -> ReviewResult<Vec<PullRequest>> {
        Ok(Vec::new())
    }

    async fn fetch_files(&self, _owner: &str, _repo: &str, _pr_number: u64) -> ReviewResult<Vec<PrFile>> {
        self.files.clone()
    }

    async fn post_comment(&self, _owner: &str, _repo: &str, pr_number: u64, body: &str) -> ReviewResult<()> {
        self.comments.lock().unwrap().push((pr_number, body.to_string()));
        Ok(())
    }
}

/// Model provider answering from a per-model script and recording call order.
/// Models without a scripted answer fail with a validation error.
#[derive(Default)]
pub struct ScriptedProvider {
    answers: HashMap<String, Result<String, AiProviderError>>,
    pub calls: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn answer(mut self, model_id: &str, text: &str) -> Self {
        self.answers.insert(model_id.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, model_id: &str, error: AiProviderError) -> Self {
        self.answers.insert(model_id.to_string(), Err(error));
        self
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn invoke(&self, model_id: &str, prompt: &str) -> Result<String, AiProviderError> {
        self.calls.lock().unwrap().push(model_id.to_string());
        self.prompts.lock().unwrap().push(prompt.to_string());

        self.answers
            .get(model_id)
            .cloned()
            .unwrap_or_else(|| Err(AiProviderError::ValidationError(format!("unknown model {}", model_id))))
    }
}

pub fn model_ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
