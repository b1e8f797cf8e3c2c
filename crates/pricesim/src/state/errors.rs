/// Error types for configuration, input editing and export operations.
use super::FieldId;

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Parse { field: FieldId, value: String },
    NonFinite { field: FieldId },
    OutOfRange { field: FieldId, value: i32, min: i32, max: i32 },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Parse { field, value } => {
                write!(f, "{}: '{}' is not a valid number", field.label(), value)
            }
            InputError::NonFinite { field } => {
                write!(f, "{}: value must be finite", field.label())
            }
            InputError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{}: {}% is outside the slider range {}% to {}%",
                field.label(),
                value,
                min,
                max
            ),
        }
    }
}

impl std::error::Error for InputError {}

#[derive(Debug)]
pub enum ExportError {
    Io(String),
    /// The current inputs do not produce a table
    NoResults(String),
    EmptyPath,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "IO error: {}", msg),
            ExportError::NoResults(msg) => write!(f, "Nothing to export: {}", msg),
            ExportError::EmptyPath => write!(f, "No file path given"),
        }
    }
}

impl std::error::Error for ExportError {}
