use thiserror::Error;

/// Reasons a marker line cannot be turned into a `ProfilingEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected 11 or 12 tokens, found {found}")]
    TokenCount { found: usize },

    #[error("malformed time field {0:?}, expected H:M:S")]
    TimeField(String),

    #[error("bad {field} value {value:?}")]
    Number { field: &'static str, value: String },
}
