use thiserror::Error;

/// Top-level error type for the kbot system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for KbotError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("State store error: {0}")]
    State(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for KbotError {
    fn from(err: toml::de::Error) -> Self {
        KbotError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KbotError {
    fn from(err: toml::ser::Error) -> Self {
        KbotError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for KbotError {
    fn from(err: serde_json::Error) -> Self {
        KbotError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for kbot operations.
pub type Result<T> = std::result::Result<T, KbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KbotError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(KbotError, &str)> = vec![
            (
                KbotError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                KbotError::Search("index unreachable".to_string()),
                "Search error: index unreachable",
            ),
            (
                KbotError::State("lock poisoned".to_string()),
                "State store error: lock poisoned",
            ),
            (
                KbotError::Serialization("invalid json".to_string()),
                "Serialization error: invalid json",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kbot_err: KbotError = io_err.into();
        assert!(matches!(kbot_err, KbotError::Io(_)));
        assert!(kbot_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let err: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(err.is_err());
        let kbot_err: KbotError = err.unwrap_err().into();
        assert!(matches!(kbot_err, KbotError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        assert!(err.is_err());
        let kbot_err: KbotError = err.unwrap_err().into();
        assert!(matches!(kbot_err, KbotError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = KbotError::Search("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Search"));
        assert!(debug_str.contains("test debug"));
    }
}
