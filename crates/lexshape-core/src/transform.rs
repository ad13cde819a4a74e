use lexshape_types::{OutputMode, WordRecord};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::entry::Entry;
use crate::error::{Result, TransformError};
use crate::format::AsciiPrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Reshaped dictionary, ready to serialize
#[derive(Debug, Clone, PartialEq)]
pub enum Reshaped {
    /// word -> definition, in first-insertion order
    Mapping(Map<String, Value>),
    List(Vec<WordRecord>),
}

impl Reshaped {
    /// Number of records that will be written
    pub fn len(&self) -> usize {
        match self {
            Reshaped::Mapping(map) => map.len(),
            Reshaped::List(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn mode(&self) -> OutputMode {
        match self {
            Reshaped::Mapping(_) => OutputMode::Mapping,
            Reshaped::List(_) => OutputMode::List,
        }
    }

    /// Serialize with 4-space indentation, escaping non-ASCII text
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, AsciiPrettyFormatter::with_indent(INDENT));

        let written = match self {
            Reshaped::Mapping(map) => map.serialize(&mut serializer),
            Reshaped::List(records) => records.serialize(&mut serializer),
        };
        written.map_err(TransformError::Serialize)?;

        Ok(out)
    }
}

/// Builds the output shape for a given mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer {
    mode: OutputMode,
}

impl Transformer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn transform_entries(&self, entries: &[Entry]) -> Reshaped {
        let records = entries.iter().map(Entry::to_record);

        match self.mode {
            OutputMode::Mapping => {
                let mut map = Map::new();
                let mut overwritten = 0usize;

                for record in records {
                    if let Some(previous) = map.insert(record.word.clone(), record.definition) {
                        tracing::debug!(word = %record.word, ?previous, "Overwriting duplicate word");
                        overwritten += 1;
                    }
                }

                if overwritten > 0 {
                    tracing::warn!("{overwritten} entries overwrote an earlier entry with the same word");
                }

                Reshaped::Mapping(map)
            }
            OutputMode::List => Reshaped::List(records.collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::entry::parse_entries;

    const SAMPLE: &str = r#"[
        {"base_forms": ["run", "ran"], "definition": "to move fast"},
        {"base_forms": [], "definition": "x"}
    ]"#;

    fn reshape(json: &str, mode: OutputMode) -> Reshaped {
        let entries = parse_entries(json).unwrap();
        Transformer::new(mode).transform_entries(&entries)
    }

    #[test]
    fn test_mapping_example() {
        let out = reshape(SAMPLE, OutputMode::Mapping);
        let Reshaped::Mapping(map) = out else {
            panic!("expected mapping output");
        };
        assert_eq!(Value::Object(map), json!({"run, ran": "to move fast", "Unknown": "x"}));
    }

    #[test]
    fn test_list_example() {
        let out = reshape(SAMPLE, OutputMode::List);
        assert_eq!(
            out,
            Reshaped::List(vec![
                WordRecord {
                    word: "run, ran".to_string(),
                    definition: json!("to move fast"),
                },
                WordRecord {
                    word: "Unknown".to_string(),
                    definition: json!("x"),
                },
            ])
        );
    }

    #[test]
    fn test_null_base_forms_example() {
        let out = reshape(r#"[{"base_forms": null}]"#, OutputMode::Mapping);
        let Reshaped::Mapping(map) = out else {
            panic!("expected mapping output");
        };
        assert_eq!(Value::Object(map), json!({"Unknown": "No definition available"}));
    }

    #[test]
    fn test_mapping_last_write_wins_keeps_position() {
        let out = reshape(
            r#"[
                {"base_forms": ["a"], "definition": "first"},
                {"base_forms": ["b"], "definition": "middle"},
                {"base_forms": ["a"], "definition": "last"}
            ]"#,
            OutputMode::Mapping,
        );
        let Reshaped::Mapping(map) = out else {
            panic!("expected mapping output");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], json!("last"));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_list_keeps_every_entry() {
        let json = r#"[
            {"base_forms": ["a"]},
            {"base_forms": ["a"]},
            {},
            {"base_forms": [null]}
        ]"#;
        let out = reshape(json, OutputMode::List);
        assert_eq!(out.len(), 4);
        assert_eq!(out.mode(), OutputMode::List);
    }

    #[test]
    fn test_transformer_reports_mode() {
        assert_eq!(Transformer::new(OutputMode::List).mode(), OutputMode::List);
        assert_eq!(Transformer::default().mode(), OutputMode::Mapping);
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let out = reshape(SAMPLE, OutputMode::Mapping);
        let text = String::from_utf8(out.to_pretty_json().unwrap()).unwrap();
        assert_eq!(text, "{\n    \"run, ran\": \"to move fast\",\n    \"Unknown\": \"x\"\n}");
    }

    #[test]
    fn test_pretty_list_layout() {
        let out = reshape(r#"[{"base_forms": ["go"], "definition": null}]"#, OutputMode::List);
        let text = String::from_utf8(out.to_pretty_json().unwrap()).unwrap();
        assert_eq!(
            text,
            "[\n    {\n        \"word\": \"go\",\n        \"definition\": null\n    }\n]"
        );
    }

    #[test]
    fn test_pretty_json_escapes_non_ascii() {
        let out = reshape(
            r#"[{"base_forms": ["café"], "definition": "a small restaurant – bistro"}]"#,
            OutputMode::Mapping,
        );
        let text = String::from_utf8(out.to_pretty_json().unwrap()).unwrap();
        assert_eq!(
            text,
            "{\n    \"caf\\u00e9\": \"a small restaurant \\u2013 bistro\"\n}"
        );
    }

    #[test]
    fn test_empty_input() {
        let mapping = reshape("[]", OutputMode::Mapping);
        assert!(mapping.is_empty());
        assert_eq!(mapping.to_pretty_json().unwrap(), b"{}");

        let list = reshape("[]", OutputMode::List);
        assert_eq!(list.to_pretty_json().unwrap(), b"[]");
    }
}
