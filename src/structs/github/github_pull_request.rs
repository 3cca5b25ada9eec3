use serde::Deserialize;
use crate::structs::github::github_user::GitHubUser;

#[derive(Deserialize, Debug, Clone)]
pub struct GitHubPullRequest {
    pub number: u64,
    pub title: String,
    pub user: Option<GitHubUser>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub head: Option<GitHubHead>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GitHubHead {
    pub sha: String,
}
