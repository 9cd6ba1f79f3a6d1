use serde::{Deserialize, Serialize};

/// Pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Also ask the model to extract query entities, reported under
    /// `semantic_query`.
    #[serde(default)]
    pub semantic_entities: bool,
}
