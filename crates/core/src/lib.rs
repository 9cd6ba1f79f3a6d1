pub mod adjudicator;
pub mod config;
pub mod entities;
pub mod extraction;
pub mod llm;
pub mod metrics;
pub mod pipeline;
pub mod rules;
pub mod testing;

pub use adjudicator::{AdjudicationResult, Adjudicator, LlmAdjudicator};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig,
};
pub use entities::{ExtractedEntities, LlmEntityExtractor, PatternEntityExtractor, SemanticParse};
pub use extraction::{PdfTextExtractor, TextExtractor};
pub use llm::{create_llm_client, LlmClient, LlmConfig, LlmError, LlmProvider};
pub use pipeline::{ClaimPipeline, EvaluationResponse, FinalResult, PipelineConfig, PipelineError};
pub use rules::{Decision, RuleConfig, RuleDecision, RuleEngine};
