use async_trait::async_trait;
use crate::errors::ReviewResult;
use crate::structs::pr_file::PrFile;
use crate::structs::pull_request::PullRequest;

#[async_trait]
pub trait HostingProvider: Send + Sync {
    async fn list_pull_requests(&self, owner: &str, repo: &str) -> ReviewResult<Vec<PullRequest>>;

    async fn fetch_files(&self, owner: &str, repo: &str, pr_number: u64) -> ReviewResult<Vec<PrFile>>;

    async fn post_comment(&self, owner: &str, repo: &str, pr_number: u64, body: &str) -> ReviewResult<()>;
}
