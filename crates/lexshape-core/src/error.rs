use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Cannot read input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid format: expected a JSON array of entries, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Invalid format: entry {index} is {found}, expected an object")]
    EntryNotObject { index: usize, found: &'static str },

    #[error("Invalid format: entry {index} has base_forms set to {found}, expected an array")]
    InvalidBaseForms { index: usize, found: &'static str },

    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// JSON type name for diagnostics
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
