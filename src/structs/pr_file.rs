use serde::{Deserialize, Serialize};

/// A file changed by a pull request. `content` is absent for removed or oversized files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrFile {
    pub filename: String,
    pub status: String,
    pub content: Option<String>,
}
