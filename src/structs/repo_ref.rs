use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::errors::{ReviewError, ReviewResult};

static GITHUB_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/([^/\s]+)/([^/\s]+)").expect("valid GitHub URL pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Accepts `owner/repo`, `github.com/owner/repo` or a full GitHub URL.
    pub fn parse(input: &str) -> ReviewResult<Self> {
        let input = input.trim();

        if let Some(captures) = GITHUB_URL.captures(input) {
            let repo = captures[2].trim_end_matches(".git").to_string();
            return Ok(Self { owner: captures[1].to_string(), repo });
        }

        let parts: Vec<&str> = input.split('/').collect();
        if let [owner, repo] = parts.as_slice() {
            if !owner.is_empty() && !repo.is_empty() {
                return Ok(Self { owner: owner.to_string(), repo: repo.to_string() });
            }
        }

        Err(ReviewError::user_input_error(
            input,
            "a repository in 'owner/repo' form or a GitHub URL",
            "Use 'owner/repo' or a GitHub URL such as https://github.com/owner/repo",
        ))
    }

    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
