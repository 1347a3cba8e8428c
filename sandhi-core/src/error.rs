//! Error types for the rule engine

use thiserror::Error;

/// Errors surfaced by the sandhi engine
///
/// Inapplicable operations (a compound whose members fail validation, a word
/// with no split) are reported as values, not through this enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SandhiError {
    /// An operand was empty or otherwise unusable
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A key (compound kind, tense, upasarga, ...) outside its closed set
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Grammar data failed to load or validate
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl SandhiError {
    pub(crate) fn invalid_argument(kind: &str, value: &str) -> Self {
        SandhiError::InvalidArgument(format!("unknown {kind} '{value}'"))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SandhiError>;
