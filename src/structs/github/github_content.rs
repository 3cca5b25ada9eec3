use serde::Deserialize;

/// Body of `GET /repos/{owner}/{repo}/contents/{path}` for a single file.
#[derive(Deserialize, Debug, Clone)]
pub struct GitHubContent {
    pub content: Option<String>,
    pub encoding: Option<String>,
    #[serde(default)]
    pub size: u64,
}
