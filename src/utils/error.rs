use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadError {
    #[error("Malformed input in {field}: {reason}")]
    MalformedInput { field: String, reason: String },

    #[error("Constraint violated by {field} = {value}: {reason}")]
    ConstraintViolation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read road source '{source_name}': {source}")]
    SourceError {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Output error: {message}")]
    OutputError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The source text does not have the expected token shape.
    Input,
    /// Well-formed tokens that break a domain rule.
    Constraint,
    Source,
    Config,
    Output,
}

impl RoadError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn constraint(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::ConstraintViolation {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedInput { .. } => ErrorCategory::Input,
            Self::ConstraintViolation { .. } => ErrorCategory::Constraint,
            Self::SourceError { .. } | Self::IoError(_) => ErrorCategory::Source,
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => ErrorCategory::Config,
            Self::SerializationError(_) | Self::CsvError(_) | Self::OutputError { .. } => {
                ErrorCategory::Output
            }
        }
    }

    /// Whether this error means the road description itself was rejected.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Input | ErrorCategory::Constraint | ErrorCategory::Source
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Constraint => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Source => 3,
            ErrorCategory::Output => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MalformedInput { field, reason } => {
                format!("The road file is not in the expected format ({field}: {reason})")
            }
            Self::ConstraintViolation {
                field,
                value,
                reason,
            } => format!("The road file breaks a rule: {field} = {value}, {reason}"),
            Self::SourceError { source_name, .. } => {
                format!("Could not read the road file '{source_name}'")
            }
            Self::IoError(e) => format!("File system error: {e}"),
            Self::ConfigError { message } => format!("Configuration problem: {message}"),
            Self::InvalidConfigValue { field, value, .. } => {
                format!("Configuration value '{value}' is not valid for {field}")
            }
            Self::SerializationError(_) | Self::CsvError(_) | Self::OutputError { .. } => {
                "Could not render the neighborhood report".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Expect the road length, the city count, then one 'position name' pair per city"
            }
            ErrorCategory::Constraint => {
                "Keep the road length in 3..=1000000, use 2..=10000 cities and place each city at a distinct position strictly inside the road"
            }
            ErrorCategory::Source => "Check that the input path exists and is readable",
            ErrorCategory::Config => "Review the TOML configuration file and the command line flags",
            ErrorCategory::Output => "Try a different --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, RoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_exit_codes() {
        let malformed = RoadError::malformed("road length", "missing");
        assert_eq!(malformed.category(), ErrorCategory::Input);
        assert_eq!(malformed.exit_code(), 1);
        assert!(malformed.is_load_failure());

        let violation = RoadError::constraint("city count", 1, "must be at least 2");
        assert_eq!(violation.category(), ErrorCategory::Constraint);
        assert!(violation.to_string().contains("city count = 1"));

        let config = RoadError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
        assert!(!config.is_load_failure());
    }

    #[test]
    fn test_source_error_is_load_failure() {
        let err = RoadError::SourceError {
            source_name: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.category(), ErrorCategory::Source);
        assert!(err.is_load_failure());
        assert!(err.user_friendly_message().contains("missing.txt"));
    }
}
