use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("BMI undefined for zero height (weight: {weight})")]
    ZeroHeight { weight: f64 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HealthError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HealthError::ZeroHeight { .. } | HealthError::CsvError(_) => ErrorCategory::Input,
            HealthError::ConfigError { .. }
            | HealthError::InvalidConfigValueError { .. }
            | HealthError::MissingConfigError { .. } => ErrorCategory::Configuration,
            HealthError::IoError(_) | HealthError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HealthError::ZeroHeight { .. } => {
                "Height must not be zero when computing a BMI".to_string()
            }
            HealthError::CsvError(e) => format!("Could not read the fixture: {}", e),
            HealthError::IoError(e) => format!("File access failed: {}", e),
            HealthError::SerializationError(e) => format!("Could not render the report: {}", e),
            HealthError::ConfigError { message } => format!("Bad configuration: {}", message),
            HealthError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            HealthError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HealthError::ZeroHeight { .. } => "Provide the height in meters, e.g. 1.75",
            HealthError::CsvError(_) => {
                "Check that every row holds two numeric columns and the header is skipped"
            }
            HealthError::IoError(_) => "Check that the file exists and is readable",
            HealthError::SerializationError(_) => "Retry with text output",
            HealthError::ConfigError { .. } | HealthError::InvalidConfigValueError { .. } => {
                "Fix the TOML config file and try again"
            }
            HealthError::MissingConfigError { .. } => {
                "Pass the file on the command line or set it under [fixture] in the config"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_is_input_error() {
        let err = HealthError::ZeroHeight { weight: 70.0 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("zero height"));
    }

    #[test]
    fn config_errors_exit_with_two() {
        let err = HealthError::MissingConfigError {
            field: "fixture.coders".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn io_errors_are_critical() {
        let err = HealthError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
