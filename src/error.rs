use thiserror::Error;

/// Cat facts error types
#[derive(Error, Debug)]
pub enum CatFactsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response did not contain a fact")]
    MissingFact,

    #[error("Request cancelled")]
    Cancelled,
}

/// Result type for cat facts operations
pub type Result<T> = std::result::Result<T, CatFactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = CatFactsError::InvalidArgument("text must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid argument: text must not be empty");
    }

    #[test]
    fn test_error_display_config() {
        let err = CatFactsError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_missing_fact() {
        assert_eq!(
            CatFactsError::MissingFact.to_string(),
            "Response did not contain a fact"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatFactsError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
