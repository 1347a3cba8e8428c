//! Error handling for the CLI application

use sandhi_api::ApiError;
use sandhi_core::SandhiError;
use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Grammar file failed to load or validate
    GrammarError(String),
    /// Unknown kind, lakara, gender or similar name
    InvalidArgument(String),
    /// Processing error from the engine
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::GrammarError(msg) => write!(f, "Grammar error: {msg}"),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Sandhi(SandhiError::InvalidArgument(msg)) => CliError::InvalidArgument(msg),
            ApiError::Sandhi(SandhiError::ConfigurationError(msg)) | ApiError::Config(msg) => {
                CliError::GrammarError(msg)
            }
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("text.txt".to_string()).to_string(),
            "File not found: text.txt"
        );
        assert_eq!(
            CliError::GrammarError("bad rule".to_string()).to_string(),
            "Grammar error: bad rule"
        );
        assert_eq!(
            CliError::InvalidArgument("unknown lakara 'x'".to_string()).to_string(),
            "Invalid argument: unknown lakara 'x'"
        );
        assert_eq!(
            CliError::ProcessingError("empty word".to_string()).to_string(),
            "Processing error: empty word"
        );
    }

    #[test]
    fn test_from_api_error() {
        let error = CliError::from(ApiError::Sandhi(SandhiError::InvalidArgument(
            "unknown compound kind 'x'".to_string(),
        )));
        assert!(matches!(error, CliError::InvalidArgument(_)));

        let error = CliError::from(ApiError::Config("limit".to_string()));
        assert!(matches!(error, CliError::GrammarError(_)));

        let error = CliError::from(ApiError::Sandhi(SandhiError::InvalidInput(
            "left operand is empty".to_string(),
        )));
        assert!(error.to_string().starts_with("Processing error:"));
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::FileNotFound("पाठ.txt".to_string()).into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(error.to_string(), "File not found: पाठ.txt");
    }
}
