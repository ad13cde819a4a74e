use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key used for entries whose base forms yield nothing
pub const UNKNOWN_WORD: &str = "Unknown";

/// Definition used when an entry has no `definition` key
pub const DEFAULT_DEFINITION: &str = "No definition available";

/// Joins base forms into a single word key
pub const WORD_SEPARATOR: &str = ", ";

/// Shape of the reshaped output document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// `{ word: definition }`, later duplicates overwrite earlier ones
    #[default]
    Mapping,
    /// `[{ "word": .., "definition": .. }]`, one record per input entry
    List,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Mapping => write!(f, "mapping"),
            OutputMode::List => write!(f, "list"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output mode {:?} (expected \"mapping\" or \"list\")", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for OutputMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mapping" | "map" => Ok(OutputMode::Mapping),
            "list" => Ok(OutputMode::List),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// One reshaped entry.
///
/// `definition` stays a raw JSON value so an explicit `null` in the input
/// survives into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub definition: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("mapping".parse::<OutputMode>(), Ok(OutputMode::Mapping));
        assert_eq!(" LIST ".parse::<OutputMode>(), Ok(OutputMode::List));
        assert!("table".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_mode_display_matches_parse() {
        for mode in [OutputMode::Mapping, OutputMode::List] {
            assert_eq!(mode.to_string().parse::<OutputMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_record_field_order() {
        let record = WordRecord {
            word: "run".to_string(),
            definition: Value::String("to move fast".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"word":"run","definition":"to move fast"}"#);
    }
}
