//! Error types for `coursework`
//!
//! Configuration failures are grouped under [`ConfigError`]; the CLI wraps
//! them in [`CourseworkError`] to map each failure onto a process exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::schema::{Field, JsonKind};

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `coursework` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid JSON, missing or mistyped field)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `coursework` operations.
#[derive(Debug, Error)]
pub enum CourseworkError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CourseworkError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(err) => err.exit_code(),
            Self::Json(_) => ExitCode::ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// Every variant is terminal: the loader never hands back a partially
/// populated [`Configuration`](crate::config::Configuration).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON, is empty, or is not a JSON object.
    #[error("parse error in {}: {message}", display_path(.path.as_ref()))]
    ParseError {
        /// Path to the configuration file (`None` for in-memory documents)
        path: Option<PathBuf>,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Column number where the error occurred (if available)
        column: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// A recognized key is absent from the document.
    #[error("missing required field '{field}'")]
    MissingField {
        /// The absent field
        field: Field,
    },

    /// A recognized key holds a value of the wrong JSON kind.
    #[error("field '{field}' has the wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        /// The offending field
        field: Field,
        /// Kind the field requires
        expected: JsonKind,
        /// Kind actually present in the document
        found: JsonKind,
    },

    /// An integer field holds a value outside the representable range.
    #[error("field '{field}' is out of range: {value}")]
    OutOfRange {
        /// The offending field
        field: Field,
        /// The value as written in the document
        value: String,
    },

    /// Unrecognized keys were present and the loader runs in strict mode.
    #[error("unrecognized keys in strict mode: {}", .keys.join(", "))]
    UnknownFields {
        /// The unrecognized keys, sorted
        keys: Vec<String>,
    },

    /// Referenced configuration file not found
    #[error("file not found: {}", .path.display())]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file exceeds the loader's size limit.
    #[error("{} is {size} bytes, limit is {limit} bytes", .path.display())]
    FileTooLarge {
        /// Path to the file
        path: PathBuf,
        /// Actual file size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },
}

impl ConfigError {
    /// Returns the field a field-level error refers to.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::MissingField { field }
            | Self::TypeMismatch { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingFile { .. } | Self::Unreadable { .. } => ExitCode::IO_ERROR,
            _ => ExitCode::CONFIG_ERROR,
        }
    }
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "<input>".to_string(), |p| p.display().to_string())
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `coursework` operations.
pub type Result<T> = std::result::Result<T, CourseworkError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_missing_field_exit_code() {
        let err: CourseworkError = ConfigError::MissingField { field: Field::Name }.into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_missing_file_exit_code() {
        let err: CourseworkError = ConfigError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: CourseworkError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_missing_field_display() {
        let err = ConfigError::MissingField { field: Field::Name };
        assert_eq!(err.to_string(), "missing required field 'name'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ConfigError::TypeMismatch {
            field: Field::Size,
            expected: JsonKind::Integer,
            found: JsonKind::String,
        };
        assert_eq!(
            err.to_string(),
            "field 'size' has the wrong type: expected integer, found string"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ConfigError::ParseError {
            path: Some(PathBuf::from("config.json")),
            line: Some(3),
            column: Some(7),
            message: "expected value".to_string(),
        };
        assert!(err.to_string().contains("config.json"));
        assert!(err.to_string().contains("expected value"));

        let err = ConfigError::ParseError {
            path: None,
            line: None,
            column: None,
            message: "empty".to_string(),
        };
        assert!(err.to_string().contains("<input>"));
    }

    #[test]
    fn test_unknown_fields_display() {
        let err = ConfigError::UnknownFields {
            keys: vec!["extra".to_string(), "other".to_string()],
        };
        assert!(err.to_string().contains("extra, other"));
    }

    #[test]
    fn test_field_accessor() {
        let err = ConfigError::TypeMismatch {
            field: Field::Duration,
            expected: JsonKind::Number,
            found: JsonKind::Boolean,
        };
        assert_eq!(err.field(), Some(Field::Duration));
        let err = ConfigError::UnknownFields { keys: Vec::new() };
        assert_eq!(err.field(), None);
    }
}
