//! Configuration schema types
//!
//! Defines the five-field [`Configuration`] record, the catalogue of
//! recognized keys ([`Field`]) and the JSON value classification
//! ([`JsonKind`]) used when reporting type mismatches.
//!
//! `Configuration` does not implement `Deserialize`. All parsing goes
//! through [`ConfigLoader`](super::loader::ConfigLoader), which extracts
//! each field explicitly.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use crate::error::CourseworkError;

// ============================================================================
// Configuration Record
// ============================================================================

/// Immutable run configuration.
///
/// Fields are private; once built, a `Configuration` is never mutated.
/// Build one directly with [`Configuration::new`] or through the loader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    size: i64,
    name: String,
    simulation: bool,
    path: String,
    duration: f64,
}

impl Configuration {
    /// Creates a configuration from caller-supplied values.
    #[must_use]
    pub fn new(
        size: i64,
        name: impl Into<String>,
        simulation: bool,
        path: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            size,
            name: name.into(),
            simulation,
            path: path.into(),
            duration,
        }
    }

    /// Problem size.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Human-readable run name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a simulation run.
    #[must_use]
    pub const fn simulation(&self) -> bool {
        self.simulation
    }

    /// Data path, kept exactly as written in the document.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run duration.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the JSON object form, holding exactly the five recognized keys.
    ///
    /// A non-finite `duration` serializes as `null` and will not load back.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(Field::Size.key().to_string(), Value::from(self.size));
        map.insert(Field::Name.key().to_string(), Value::from(self.name.as_str()));
        map.insert(Field::Simulation.key().to_string(), Value::from(self.simulation));
        map.insert(Field::Path.key().to_string(), Value::from(self.path.as_str()));
        map.insert(Field::Duration.key().to_string(), Value::from(self.duration));
        Value::Object(map)
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CourseworkError::Json`] if serialization fails.
    pub fn to_json_string_pretty(&self) -> Result<String, CourseworkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the JSON form to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`CourseworkError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), CourseworkError> {
        let mut text = self.to_json_string_pretty()?;
        text.push('\n');
        std::fs::write(path, text)?;
        tracing::debug!(file = %path.display(), "configuration written");
        Ok(())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size:       {}", self.size)?;
        writeln!(f, "name:       {}", self.name)?;
        writeln!(f, "simulation: {}", self.simulation)?;
        writeln!(f, "path:       {}", self.path)?;
        write!(f, "duration:   {}", self.duration)
    }
}

// ============================================================================
// Recognized Keys
// ============================================================================

/// One of the five keys the loader recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `size`: integer
    Size,
    /// `name`: string
    Name,
    /// `simulation`: boolean
    Simulation,
    /// `path`: string
    Path,
    /// `duration`: number
    Duration,
}

impl Field {
    /// All recognized keys, in extraction order.
    pub const ALL: [Self; 5] = [
        Self::Size,
        Self::Name,
        Self::Simulation,
        Self::Path,
        Self::Duration,
    ];

    /// The JSON key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Name => "name",
            Self::Simulation => "simulation",
            Self::Path => "path",
            Self::Duration => "duration",
        }
    }

    /// The JSON kind this field must hold.
    #[must_use]
    pub const fn expected(self) -> JsonKind {
        match self {
            Self::Size => JsonKind::Integer,
            Self::Name | Self::Path => JsonKind::String,
            Self::Simulation => JsonKind::Boolean,
            Self::Duration => JsonKind::Number,
        }
    }

    /// Looks up a field by its JSON key. Matching is case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// JSON Value Kinds
// ============================================================================

/// Classification of a JSON value, as reported in type mismatch errors.
///
/// Numbers split into `Integer` (no fraction or exponent in the source) and
/// `Number` (everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// Integral number
    Integer,
    /// Any number
    Number,
    /// String
    String,
    /// `true` or `false`
    Boolean,
    /// Array
    Array,
    /// Object
    Object,
    /// `null`
    Null,
}

impl JsonKind {
    /// Classifies a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
