use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot parse '{value}' as a date: {reason}")]
    DateParseError { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. } => ErrorSeverity::Low,
            Self::DateParseError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            Self::ConfigError { .. } | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorSeverity::High
            }
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => message.clone(),
            Self::IoError(e) => format!("Could not read or write data: {}", e),
            Self::CsvError(e) => format!("Export failed: {}", e),
            Self::SerializationError(e) => format!("Export failed: {}", e),
            Self::ConfigError { message } => format!("The configuration file is invalid: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::DateParseError { value, .. } => format!("'{}' is not a valid date", value),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Provide a search term (an empty line matches every domain)",
            Self::IoError(_) => "Check that the file exists and that the terminal is readable",
            Self::CsvError(_) | Self::SerializationError(_) => "Retry with --format table",
            Self::ConfigError { .. } => "Make sure the file is valid TOML with a [[domains]] table array",
            Self::InvalidConfigValueError { .. } => "Fix the value in the configuration file or override it on the command line",
            Self::DateParseError { .. } => "Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
