use thiserror::Error;

#[derive(Error, Debug)]
pub enum InviteError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {location}: {message}")]
    ParseError { location: String, message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl InviteError {
    pub fn parse(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn validation(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Input,
            Self::ParseError { .. } | Self::ValidationError { .. } => ErrorCategory::Data,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ParseError { .. } => 2,
            Self::ValidationError { .. } | Self::ConfigError { .. } => 1,
            Self::IoError { .. } | Self::SerializationError(_) | Self::CsvError(_) => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, .. } => format!("Could not read input file '{}'", path),
            Self::ParseError { location, message } => {
                format!("Malformed input in {}: {}", location, message)
            }
            Self::ValidationError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            Self::ConfigError { message } => format!("Bad configuration: {}", message),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Failed to render the report".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { .. } => "Check that the file exists and is readable (--file)",
            Self::ParseError { .. } => {
                "Each line must be a JSON object with user_id, latitude and longitude"
            }
            Self::ValidationError { .. } => {
                "Latitude must be within [-90, 90] and longitude within [-180, 180]"
            }
            Self::ConfigError { .. } => "Fix the TOML config file or the command line flags",
            Self::SerializationError(_) | Self::CsvError(_) => "Try another --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, InviteError>;
