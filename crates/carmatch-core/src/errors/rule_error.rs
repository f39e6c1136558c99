/// Errors raised while building a declarative rule table.
///
/// These are programming errors in a rule definition, detected once when the
/// table is constructed, never during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("flag {flag} is defined more than once")]
    DuplicateFlag { flag: String },

    #[error("flag {flag} case {case} yields a value of the wrong kind")]
    MismatchedFlagValue { flag: String, case: usize },

    #[error("rule id {id} is used more than once")]
    DuplicateRule { id: String },

    #[error("rule {id} has an invalid factor {factor} for dimension {dimension}")]
    InvalidFactor {
        id: String,
        dimension: String,
        factor: f64,
    },

    #[error("rule {id} has no effects")]
    EmptyRule { id: String },
}
