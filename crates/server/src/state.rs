use std::sync::Arc;
use claimwise_core::{ClaimPipeline, Config, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    pipeline: Arc<ClaimPipeline>,
}

impl AppState {
    pub fn new(config: Config, pipeline: Arc<ClaimPipeline>) -> Self {
        Self { config, pipeline }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn pipeline(&self) -> &ClaimPipeline {
        self.pipeline.as_ref()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.config.server.max_upload_bytes
    }
}
