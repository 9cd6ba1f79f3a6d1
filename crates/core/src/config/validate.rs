use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0 and the upload limit is positive
/// - LLM settings (see `LlmConfig::validate`)
/// - Rule amounts are non-empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }
    if config.server.max_upload_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "server.max_upload_bytes cannot be 0".to_string(),
        ));
    }

    config
        .llm
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("llm: {}", e)))?;

    config
        .rules
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("rules: {}", e)))?;

    Ok(())
}
