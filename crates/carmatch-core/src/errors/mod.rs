mod catalog_error;
mod config_error;
mod extraction_error;
mod rule_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use extraction_error::ExtractionError;
pub use rule_error::RuleError;

/// Top-level error for the carmatch engine.
///
/// Business-logic edge cases never surface here; compilers degrade instead.
/// What remains is configuration, collaborator, and rule-table failures.
#[derive(Debug, thiserror::Error)]
pub enum CarmatchError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("extraction error: {0}")]
    ExtractionError(#[from] ExtractionError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("rule table error: {0}")]
    RuleError(#[from] RuleError),

    #[error("climate lookup failed for postal code {postal_code}: {reason}")]
    ClimateLookupFailed { postal_code: String, reason: String },

    #[error("checkpoint store error: {reason}")]
    CheckpointFailed { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type CarmatchResult<T> = Result<T, CarmatchError>;
