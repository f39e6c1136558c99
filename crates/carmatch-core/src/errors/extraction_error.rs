/// Failures reported by the structured-extraction collaborator.
///
/// The core treats any of these as "no new data this turn".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction for schema {schema} failed validation: {reason}")]
    ValidationFailed { schema: String, reason: String },

    #[error("extraction provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    #[error("extraction returned an unexpected schema: expected {expected}, got {actual}")]
    SchemaMismatch { expected: String, actual: String },
}
