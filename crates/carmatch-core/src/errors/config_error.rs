/// Configuration errors. A base weight table that cannot be loaded is fatal
/// for weight compilation across the whole process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("failed to load base weight table from {source_name}: {reason}")]
    BaseWeightsUnavailable { source_name: String, reason: String },

    #[error("base weight table has no entry for dimension {dimension}")]
    MissingBaseWeight { dimension: String },

    #[error("base weight for dimension {dimension} must be positive and finite, got {value}")]
    InvalidBaseWeight { dimension: String, value: f64 },

    #[error("invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}
