//! Configuration loader
//!
//! The loading pipeline:
//! 1. Size check against [`LoaderOptions::max_file_size`], when set
//! 2. Read as UTF-8 text, stripping a leading BOM
//! 3. Parse into a generic JSON value; the root must be an object
//! 4. Presence check for every recognized key
//! 5. Typed extraction of each key, no coercion
//! 6. Unrecognized keys become warnings (errors in strict mode)

use crate::config::schema::{Configuration, Field, JsonKind};
use crate::error::ConfigError;

use serde_json::{Map, Value};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

/// Size cap the CLI applies to configuration files (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

// ============================================================================
// Public API
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Files larger than this many bytes are rejected before reading.
    /// `None` reads files of any size.
    pub max_file_size: Option<u64>,

    /// Reject unrecognized keys instead of ignoring them.
    pub strict: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_file_size: None,
            strict: false,
        }
    }
}

/// Result of loading a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Configuration,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// The document key the warning refers to.
    pub key: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (key '{}')", self.message, self.key)
    }
}

/// Configuration loader.
///
/// Stateless apart from its options: every call reads, parses and
/// validates from scratch.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new configuration loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Returns the loader's options.
    #[must_use]
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file exceeds the size limit
    /// - The content is not UTF-8, not JSON, or not a JSON object
    /// - A recognized key is missing or holds the wrong type
    /// - Strict mode is on and unrecognized keys are present
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        tracing::debug!(
            file = %path.display(),
            strict = self.options.strict,
            "loading configuration"
        );

        let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
        if let Some(limit) = self.options.max_file_size
            && metadata.len() > limit
        {
            return Err(ConfigError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let raw_content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::InvalidData {
                ConfigError::ParseError {
                    path: Some(path.to_path_buf()),
                    line: None,
                    column: None,
                    message: "file is not valid UTF-8".to_string(),
                }
            } else {
                io_error(path, e)
            }
        })?;

        self.parse(&raw_content, Some(path))
    }

    /// Loads a configuration from an in-memory JSON document.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`], minus the file-level failures.
    pub fn load_from_str(&self, content: &str) -> Result<LoadResult, ConfigError> {
        self.parse(content, None)
    }

    /// Builds a configuration from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if `value` is not an object, and
    /// the field-level errors of [`ConfigLoader::load`] otherwise.
    pub fn from_value(&self, value: &Value) -> Result<LoadResult, ConfigError> {
        let map = value.as_object().ok_or_else(|| not_an_object(value, None))?;
        self.extract(map)
    }

    fn parse(&self, content: &str, path: Option<&Path>) -> Result<LoadResult, ConfigError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        if content.trim().is_empty() {
            return Err(ConfigError::ParseError {
                path: path.map(Path::to_path_buf),
                line: None,
                column: None,
                message: "Configuration file is empty".to_string(),
            });
        }

        let root: Value = serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.map(Path::to_path_buf),
            line: Some(e.line()),
            column: Some(e.column()),
            message: e.to_string(),
        })?;

        match root {
            Value::Object(ref map) => self.extract(map),
            ref other => Err(not_an_object(other, path)),
        }
    }

    fn extract(&self, map: &Map<String, Value>) -> Result<LoadResult, ConfigError> {
        // Missing keys are reported before any type problem.
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| !map.contains_key(field.key()))
        {
            return Err(ConfigError::MissingField { field });
        }

        let config = Configuration::new(
            extract_integer(map, Field::Size)?,
            extract_string(map, Field::Name)?,
            extract_bool(map, Field::Simulation)?,
            extract_string(map, Field::Path)?,
            extract_number(map, Field::Duration)?,
        );

        let mut unknown: Vec<String> = map
            .keys()
            .filter(|key| Field::from_key(key).is_none())
            .cloned()
            .collect();
        unknown.sort_unstable();

        if self.options.strict && !unknown.is_empty() {
            return Err(ConfigError::UnknownFields { keys: unknown });
        }

        let warnings = unknown
            .into_iter()
            .map(|key| {
                tracing::debug!(key = %key, "ignoring unrecognized key");
                LoadWarning {
                    message: "Unrecognized key ignored".to_string(),
                    key,
                }
            })
            .collect();

        Ok(LoadResult { config, warnings })
    }
}

/// Loads a configuration file with default options, discarding warnings.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load(path: &Path) -> Result<Configuration, ConfigError> {
    ConfigLoader::with_defaults()
        .load(path)
        .map(|result| result.config)
}

// ============================================================================
// Field Extraction
// ============================================================================

fn require(map: &Map<String, Value>, field: Field) -> Result<&Value, ConfigError> {
    map.get(field.key())
        .ok_or(ConfigError::MissingField { field })
}

fn mismatch(field: Field, value: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        field,
        expected: field.expected(),
        found: JsonKind::of(value),
    }
}

fn extract_integer(map: &Map<String, Value>, field: Field) -> Result<i64, ConfigError> {
    let value = require(map, field)?;
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if value.is_u64() {
        return Err(ConfigError::OutOfRange {
            field,
            value: value.to_string(),
        });
    }
    Err(mismatch(field, value))
}

fn extract_number(map: &Map<String, Value>, field: Field) -> Result<f64, ConfigError> {
    let value = require(map, field)?;
    value.as_f64().ok_or_else(|| mismatch(field, value))
}

fn extract_string(map: &Map<String, Value>, field: Field) -> Result<String, ConfigError> {
    let value = require(map, field)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| mismatch(field, value))
}

fn extract_bool(map: &Map<String, Value>, field: Field) -> Result<bool, ConfigError> {
    let value = require(map, field)?;
    value.as_bool().ok_or_else(|| mismatch(field, value))
}

// ============================================================================
// Helpers
// ============================================================================

fn io_error(path: &Path, err: std::io::Error) -> ConfigError {
    if err.kind() == ErrorKind::NotFound {
        ConfigError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        ConfigError::Unreadable {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn not_an_object(value: &Value, path: Option<&Path>) -> ConfigError {
    ConfigError::ParseError {
        path: path.map(Path::to_path_buf),
        line: None,
        column: None,
        message: format!("expected a JSON object, found {}", JsonKind::of(value)),
    }
}

// ============================================================================
// Tests
// ============================================================================
