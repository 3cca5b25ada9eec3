use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct GitHubPrFile {
    pub filename: String,
    pub status: String,
}
