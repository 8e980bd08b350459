use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Form field '{field}' is not available")]
    MissingField { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Request processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Io,
}

impl BridgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::ApiError(_) => ErrorCategory::Network,
            BridgeError::SerializationError(_)
            | BridgeError::MissingField { .. }
            | BridgeError::ProcessingError { .. } => ErrorCategory::Data,
            BridgeError::ConfigError { .. } | BridgeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            BridgeError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// 依錯誤類別給出 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            _ => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the ballot service is reachable at the configured base URL",
            ErrorCategory::Data => "Check the form fields and that the service replies with JSON",
            ErrorCategory::Configuration => "Check the routes file and command line options",
            ErrorCategory::Io => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
