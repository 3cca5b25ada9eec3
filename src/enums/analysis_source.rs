use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnalysisSource {
    #[serde(rename_all = "camelCase")]
    Model { model_id: String },
    Mock { reason: String },
}
