/// Catalog store errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("catalog row {id} is malformed: {reason}")]
    MalformedRow { id: String, reason: String },

    #[error("catalog store unavailable: {reason}")]
    Unavailable { reason: String },
}
