use thiserror::Error;

/// Triage error types
///
/// Triage operations themselves never fail on malformed text; they degrade
/// locally (see the component contracts). These variants cover the fallible
/// surface: configuration loading and eager parsing of category/priority
/// names at caller boundaries.
#[derive(Error, Debug)]
pub enum TriageError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown complaint category name
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unknown priority level name
    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    /// Sentiment backend errors
    #[error("Sentiment error: {0}")]
    Sentiment(String),
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for TriageError {
    fn from(err: config::ConfigError) -> Self {
        TriageError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TriageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TriageError::InvalidCategory("Parking".to_string()).to_string(),
            "Invalid category: Parking"
        );
        assert_eq!(
            TriageError::InvalidPriority("Urgent".to_string()).to_string(),
            "Invalid priority: Urgent"
        );
        assert_eq!(
            TriageError::Configuration("bad toml".to_string()).to_string(),
            "Configuration error: bad toml"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err = config::ConfigError::Message("missing field".to_string());
        let converted: TriageError = err.into();
        assert!(matches!(converted, TriageError::Configuration(_)));
        assert!(converted.to_string().contains("missing field"));
    }
}
