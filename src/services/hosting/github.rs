use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use serde_json::json;
use crate::config::constants::{GITHUB_API_VERSION, GITHUB_FILES_PER_PAGE, MAX_REMOTE_FILE_BYTES};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::github_config::GitHubConfig;
use crate::structs::github::github_content::GitHubContent;
use crate::structs::github::github_pr_file::GitHubPrFile;
use crate::structs::github::github_pull_request::GitHubPullRequest;
use crate::structs::pr_file::PrFile;
use crate::structs::pull_request::PullRequest;
use crate::traits::hosting_provider::HostingProvider;

/// GitHub REST v3 client. Reads work anonymously; posting comments needs a token.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    token_env: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> ReviewResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(GITHUB_API_VERSION));

        let token = config.token.clone().filter(|t| !t.trim().is_empty());
        if let Some(token) = &token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ReviewError::config_error("GitHub token contains invalid characters", Some("github.token"), None))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ReviewError::config_error("Invalid user agent", Some("github.user_agent"), None))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
            token_env: config.token_env.clone(),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn api_url(&self, segments: &[&str]) -> ReviewResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ReviewError::config_error(&format!("Invalid GitHub API URL '{}': {}", self.base_url, e), Some("github.api_base_url"), None)
        })?;

        url.path_segments_mut()
            .map_err(|_| ReviewError::config_error("GitHub API URL cannot take a path", Some("github.api_base_url"), None))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url, operation: &str) -> ReviewResult<T> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, operation, url.as_str(), &body));
        }

        Ok(response.json::<T>().await?)
    }

    async fn list_files(&self, owner: &str, repo: &str, pr_number: u64) -> ReviewResult<(String, Vec<GitHubPrFile>)> {
        let number = pr_number.to_string();

        let pr_url = self.api_url(&["repos", owner, repo, "pulls", &number])?;
        let pull: GitHubPullRequest = self.get_json(pr_url, "fetch pull request").await?;
        let head_sha = pull.head.map(|h| h.sha).unwrap_or_default();

        let mut files_url = self.api_url(&["repos", owner, repo, "pulls", &number, "files"])?;
        files_url.query_pairs_mut().append_pair("per_page", &GITHUB_FILES_PER_PAGE.to_string());
        let files: Vec<GitHubPrFile> = self.get_json(files_url, "list pull request files").await?;

        Ok((head_sha, files))
    }

    async fn file_content(&self, owner: &str, repo: &str, git_ref: &str, path: &str) -> ReviewResult<Option<String>> {
        let mut segments = vec!["repos", owner, repo, "contents"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));

        let mut url = self.api_url(&segments)?;
        if !git_ref.is_empty() {
            url.query_pairs_mut().append_pair("ref", git_ref);
        }

        let content: GitHubContent = self.get_json(url, "fetch file content").await?;
        Ok(decode_content(&content))
    }
}

#[async_trait]
impl HostingProvider for GitHubClient {
    async fn list_pull_requests(&self, owner: &str, repo: &str) -> ReviewResult<Vec<PullRequest>> {
        let mut url = self.api_url(&["repos", owner, repo, "pulls"])?;
        url.query_pairs_mut()
            .append_pair("state", "open")
            .append_pair("per_page", "100");

        let pulls: Vec<GitHubPullRequest> = self.get_json(url, "list pull requests").await?;
        log::debug!("Found {} open pull requests in {}/{}", pulls.len(), owner, repo);

        Ok(pulls
            .into_iter()
            .map(|pr| PullRequest {
                number: pr.number,
                title: pr.title,
                user: pr.user.map(|u| u.login),
                created_at: pr.created_at,
                updated_at: pr.updated_at,
            })
            .collect())
    }

    async fn fetch_files(&self, owner: &str, repo: &str, pr_number: u64) -> ReviewResult<Vec<PrFile>> {
        let repository = format!("{}/{}", owner, repo);

        let (head_sha, files) = self
            .list_files(owner, repo, pr_number)
            .await
            .map_err(|e| ReviewError::fetch_error(&repository, pr_number, &e.to_string()))?;

        let mut result = Vec::with_capacity(files.len());
        for file in files {
            let content = if file.status == "removed" {
                None
            } else {
                match self.file_content(owner, repo, &head_sha, &file.filename).await {
                    Ok(content) => content,
                    Err(e) => {
                        log::warn!("⚠️ Could not fetch content for {}: {}", file.filename, e);
                        None
                    }
                }
            };

            result.push(PrFile {
                filename: file.filename,
                status: file.status,
                content,
            });
        }

        log::info!("📁 Fetched {} changed files from {}#{}", result.len(), repository, pr_number);
        Ok(result)
    }

    async fn post_comment(&self, owner: &str, repo: &str, pr_number: u64, body: &str) -> ReviewResult<()> {
        if !self.has_token() {
            return Err(ReviewError::credential_missing(&self.token_env, "posting comments"));
        }

        let number = pr_number.to_string();
        let url = self.api_url(&["repos", owner, repo, "issues", &number, "comments"])?;

        let response = self.client
            .post(url.clone())
            .json(&json!({ "body": body }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, "post comment", url.as_str(), &text));
        }

        log::info!("💬 Comment posted to {}/{}#{}", owner, repo, pr_number);
        Ok(())
    }
}

fn status_error(status: StatusCode, operation: &str, url: &str, body: &str) -> ReviewError {
    let reason = format!("HTTP {}: {}", status.as_u16(), body.trim());
    match status {
        StatusCode::UNAUTHORIZED => ReviewError::AuthError { operation: operation.to_string(), reason },
        StatusCode::FORBIDDEN => ReviewError::PermissionError { operation: operation.to_string(), reason },
        StatusCode::NOT_FOUND => ReviewError::NotFoundError { operation: operation.to_string(), resource: url.to_string() },
        _ => ReviewError::NetworkError {
            operation: operation.to_string(),
            url: Some(url.to_string()),
            status_code: Some(status.as_u16()),
            reason,
        },
    }
}

/// Base64 payload to text. Oversized or undecodable files yield `None`.
fn decode_content(content: &GitHubContent) -> Option<String> {
    if content.size > MAX_REMOTE_FILE_BYTES {
        log::debug!("Skipping file of {} bytes", content.size);
        return None;
    }

    let raw = content.content.as_deref()?;
    match content.encoding.as_deref() {
        Some("base64") => {
            let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = STANDARD.decode(cleaned).ok()?;
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Some(raw.to_string()),
    }
}
