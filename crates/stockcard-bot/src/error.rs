//! Error types for bot operations

use stockcard_core::PresentationError;
use thiserror::Error;

/// Bot specific errors
#[derive(Debug, Error)]
pub enum BotError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Command could not be parsed
    #[error("Command error: {0}")]
    CommandError(String),

    /// Host platform failure
    #[error(transparent)]
    Presentation(#[from] PresentationError),

    /// HTTP client could not be built
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;

/// Convert stockcard_core::Error to BotError
impl From<stockcard_core::Error> for BotError {
    fn from(err: stockcard_core::Error) -> Self {
        match err {
            stockcard_core::Error::Presentation(e) => BotError::Presentation(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BotError::CommandError("Unknown command: foo".to_string());
        assert_eq!(err.to_string(), "Command error: Unknown command: foo");

        let err = BotError::ConfigError("stock_api_url is empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: stock_api_url is empty");
    }

    #[test]
    fn test_refresh_error_becomes_presentation() {
        let core_err = stockcard_core::Error::from(PresentationError::Unreachable(
            "down".to_string(),
        ));
        let bot_err = BotError::from(core_err);

        assert!(matches!(
            bot_err,
            BotError::Presentation(PresentationError::Unreachable(ref msg)) if msg == "down"
        ));
        assert_eq!(bot_err.to_string(), "Host platform unreachable: down");
    }
}
