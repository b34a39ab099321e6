use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream {endpoint} responded with status {status}")]
    UpstreamStatus { endpoint: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Configuration,
    Data,
    System,
}

impl AggregatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AggregatorError::ApiError(_) | AggregatorError::UpstreamStatus { .. } => {
                ErrorCategory::Upstream
            }
            AggregatorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AggregatorError::SerializationError(_) => ErrorCategory::Data,
            AggregatorError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Short message fit for a terminal, without upstream URLs or query strings.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AggregatorError::ApiError(_) | AggregatorError::UpstreamStatus { .. } => {
                "Unable to reach the Steam API".to_string()
            }
            AggregatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            AggregatorError::IoError(e) => format!("System error: {}", e),
            AggregatorError::SerializationError(_) => {
                "Unexpected data from the Steam API".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let err = AggregatorError::UpstreamStatus {
            endpoint: "ranking".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Upstream);

        let err = AggregatorError::InvalidConfigValueError {
            field: "top_n".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 10".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid setting top_n: Value must be between 1 and 10"
        );
    }

    #[test]
    fn test_status_error_display() {
        let err = AggregatorError::UpstreamStatus {
            endpoint: "player count".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "Upstream player count responded with status 500"
        );
    }
}
