use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to retrieve the webpage {url}. Status code: {status}")]
    StatusError { url: String, status: u16 },

    #[error("Document parsing error: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parsing,
    Output,
    Configuration,
}

impl ErrorCategory {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Network | ErrorCategory::Parsing | ErrorCategory::Output => 1,
        }
    }
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::HttpError(_) | ScrapeError::StatusError { .. } => ErrorCategory::Network,
            ScrapeError::ParseError { .. } => ErrorCategory::Parsing,
            ScrapeError::IoError(_) => ErrorCategory::Output,
            ScrapeError::ConfigValidationError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::HttpError(e) if e.is_timeout() => {
                "The shop website did not answer before the timeout".to_string()
            }
            ScrapeError::HttpError(e) if e.is_connect() => {
                "Could not connect to the shop website".to_string()
            }
            ScrapeError::HttpError(_) => "The request to the shop website failed".to_string(),
            ScrapeError::StatusError { status, .. } => {
                format!("Failed to retrieve the webpage. Status code: {}", status)
            }
            ScrapeError::ParseError { .. } => "The webpage could not be parsed".to_string(),
            ScrapeError::IoError(_) => "Could not write the report".to_string(),
            ScrapeError::ConfigValidationError { field, .. }
            | ScrapeError::InvalidConfigValueError { field, .. } => {
                format!("Invalid configuration: {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_network_failure() {
        let err = ScrapeError::StatusError {
            url: "https://shop.example/soodus".to_string(),
            status: 404,
        };

        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.category().exit_code(), 1);
        assert!(err.to_string().contains("Status code: 404"));
        assert!(err.user_friendly_message().contains("404"));
    }

    #[test]
    fn test_config_errors_use_distinct_exit_code() {
        let err = ScrapeError::InvalidConfigValueError {
            field: "source.url".to_string(),
            value: "ftp://shop".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.category().exit_code(), 2);
        assert_eq!(err.user_friendly_message(), "Invalid configuration: source.url");
    }
}
