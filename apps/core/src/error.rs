use thiserror::Error;

/// Application-wide error type for everything around the pure text core.
///
/// The analyzer and synthesizers never fail; these errors come from request
/// validation, configuration, the busy flag and JSON output.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents data validation errors (e.g., a blank prompt).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unparsable environment variable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Another generation is still in flight on the same generator.
    #[error("A generation is already in progress")]
    Busy,

    /// Serializing a result for `--format json` output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Validation("empty".into()).to_string(),
            "Validation error: empty"
        );
        assert_eq!(AppError::Busy.to_string(), "A generation is already in progress");
    }

    #[test]
    fn test_json_error_converts() {
        let source = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = AppError::from(source);

        assert!(matches!(err, AppError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
