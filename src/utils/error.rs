use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Spec not found: {path}")]
    SpecNotFound { path: String },

    #[error("Could not parse OpenAPI spec at {path}: {message}")]
    SpecParseError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NavigatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NavigatorError::IoError(_) => ErrorCategory::Io,
            NavigatorError::SerializationError(_)
            | NavigatorError::YamlError(_)
            | NavigatorError::SpecNotFound { .. }
            | NavigatorError::SpecParseError { .. } => ErrorCategory::Input,
            NavigatorError::ConfigError { .. }
            | NavigatorError::ConfigValidationError { .. }
            | NavigatorError::MissingConfigError { .. }
            | NavigatorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NavigatorError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NavigatorError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full".to_string()
            }
            NavigatorError::SerializationError(_) => {
                "Report this issue; alignment results could not be serialized".to_string()
            }
            NavigatorError::YamlError(_) => "Check the YAML syntax of the input file".to_string(),
            NavigatorError::SpecNotFound { .. } => {
                "Pass an existing OpenAPI document with --spec=path/to/openapi.(yaml|json)"
                    .to_string()
            }
            NavigatorError::SpecParseError { .. } => {
                "Make sure the document is valid OpenAPI and declares a 'paths' section".to_string()
            }
            NavigatorError::ConfigError { .. } | NavigatorError::ConfigValidationError { .. } => {
                "Fix the TOML configuration file and try again".to_string()
            }
            NavigatorError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            NavigatorError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            NavigatorError::ProcessingError { .. } => {
                "Re-run with --verbose to see which phase failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write files: {}", self),
            ErrorCategory::Input => format!("The input could not be read: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
            ErrorCategory::Processing => format!("Alignment failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let io = NavigatorError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let missing = NavigatorError::SpecNotFound {
            path: "api.yaml".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Input);
        assert_eq!(missing.severity(), ErrorSeverity::High);

        let processing = NavigatorError::ProcessingError {
            message: "boom".to_string(),
        };
        assert_eq!(processing.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_user_friendly_message_includes_details() {
        let err = NavigatorError::MissingConfigError {
            field: "spec".to_string(),
        };
        assert!(err.user_friendly_message().contains("spec"));
        assert!(err.recovery_suggestion().contains("spec"));
    }
}
