use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {source_name}: {message}")]
    ConfigParseError {
        source_name: String,
        message: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Validation,
    Serialization,
}

impl SchemaError {
    pub fn invalid(field: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidValueError {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SchemaError::IoError(_) => ErrorCategory::Io,
            SchemaError::SerializationError(_) => ErrorCategory::Serialization,
            SchemaError::ConfigParseError { .. } => ErrorCategory::Configuration,
            SchemaError::MissingFieldError { .. } | SchemaError::InvalidValueError { .. } => {
                ErrorCategory::Validation
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SchemaError::IoError(e) => format!("Could not read or write a file: {}", e),
            SchemaError::SerializationError(e) => format!("Could not serialize JSON-LD: {}", e),
            SchemaError::ConfigParseError { source_name, .. } => {
                format!("The file '{}' is not valid TOML for this tool", source_name)
            }
            SchemaError::MissingFieldError { field } => {
                format!("The field '{}' is required but was not provided", field)
            }
            SchemaError::InvalidValueError { field, reason, .. } => {
                format!("The field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is readable/writable",
            ErrorCategory::Configuration => {
                "Compare the file against the documented manifest layout"
            }
            ErrorCategory::Validation => "Fix the reported field and run again with --check",
            ErrorCategory::Serialization => "Report this as a bug together with the input file",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::Io => 4,
            ErrorCategory::Serialization => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_share_category() {
        let missing = SchemaError::MissingFieldError {
            field: "service.name".to_string(),
        };
        let invalid = SchemaError::invalid("service.min_price", "abc", "not a number");

        assert_eq!(missing.category(), ErrorCategory::Validation);
        assert_eq!(invalid.category(), ErrorCategory::Validation);
        assert_eq!(invalid.exit_code(), 2);
        assert!(invalid.user_friendly_message().contains("service.min_price"));
    }
}
