use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct GitHubUser {
    pub login: String,
}
