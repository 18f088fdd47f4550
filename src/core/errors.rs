//! Error types for the bandplan-rs library.
//!
//! Individual band entries never produce errors: bad numeric fields are
//! coerced and then filtered. Errors here cover the document as a whole
//! (unreadable files, malformed XML) and the configuration layer.

use std::io;

use thiserror::Error;

/// Main result type for bandplan operations.
pub type Result<T> = std::result::Result<T, BandplanError>;

/// Error type for all bandplan operations.
#[derive(Error, Debug)]
pub enum BandplanError {
    /// I/O related errors (reading the band plan, writing output)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Document parsing errors
    #[error("Parse error in {format}: {message}")]
    Parse {
        /// Document format being parsed
        format: String,
        /// Error description
        message: String,
        /// Byte offset into the document (if available)
        position: Option<u64>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BandplanError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error at a byte offset
    pub fn parse_at(format: impl Into<String>, message: impl Into<String>, position: u64) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
            position: Some(position),
        }
    }
}

impl From<serde_json::Error> for BandplanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for BandplanError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Access denied");
        let err = BandplanError::io("Failed to read band plan", io_err);

        if let BandplanError::Io { message, source } = &err {
            assert_eq!(message, "Failed to read band plan");
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_config_field_error() {
        let err = BandplanError::config_field("must be positive", "min_frequency_hz");

        if let BandplanError::Config { message, field } = err {
            assert_eq!(message, "must be positive");
            assert_eq!(field, Some("min_frequency_hz".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_parse_at_keeps_position() {
        let err = BandplanError::parse_at("xml", "mismatched end tag", 42);
        if let BandplanError::Parse { position, .. } = err {
            assert_eq!(position, Some(42));
        } else {
            panic!("Expected Parse error");
        }
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: BandplanError = yaml_err.into();

        if let BandplanError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("YAML".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: BandplanError = json_err.into();
        assert!(matches!(err, BandplanError::Serialization { .. }));
    }

    #[test]
    fn test_error_display_formatting() {
        let err = BandplanError::parse_at("xml", "Syntax error", 7);
        let display = format!("{}", err);
        assert!(display.contains("Parse error in xml"));
        assert!(display.contains("Syntax error"));
    }
}
