use lexshape_types::{DEFAULT_DEFINITION, UNKNOWN_WORD, WORD_SEPARATOR, WordRecord};
use serde_json::Value;

use crate::error::{Result, TransformError, kind_of};

/// One input dictionary entry
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Surface forms with absent/null `base_forms` already folded to empty
    pub base_forms: Vec<Value>,
    /// `None` only when the key is missing; an explicit `null` is kept
    pub definition: Option<Value>,
}

impl Entry {
    /// Build an entry from the `index`-th element of the input array
    pub fn from_value(index: usize, value: Value) -> Result<Self> {
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(TransformError::EntryNotObject {
                    index,
                    found: kind_of(&other),
                });
            }
        };

        let base_forms = match object.remove("base_forms") {
            Some(Value::Array(forms)) => forms,
            None => Vec::new(),
            Some(v) if is_falsy(&v) => Vec::new(),
            Some(v) => {
                return Err(TransformError::InvalidBaseForms {
                    index,
                    found: kind_of(&v),
                });
            }
        };

        Ok(Self {
            base_forms,
            definition: object.remove("definition"),
        })
    }

    pub fn word_key(&self) -> String {
        derive_word_key(&self.base_forms)
    }

    pub fn to_record(&self) -> WordRecord {
        WordRecord {
            word: self.word_key(),
            definition: self
                .definition
                .clone()
                .unwrap_or_else(|| Value::String(DEFAULT_DEFINITION.to_string())),
        }
    }
}

/// Join the non-null forms with `", "`, or `"Unknown"` when none remain
pub fn derive_word_key(base_forms: &[Value]) -> String {
    let forms: Vec<String> = base_forms
        .iter()
        .filter(|form| !form.is_null())
        .map(form_to_string)
        .collect();

    if forms.is_empty() {
        UNKNOWN_WORD.to_string()
    } else {
        forms.join(WORD_SEPARATOR)
    }
}

/// Parse a whole input document into entries, in input order
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let document: Value = serde_json::from_str(json)?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(TransformError::NotAnArray {
                found: kind_of(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Entry::from_value(index, item))
        .collect()
}

fn form_to_string(form: &Value) -> String {
    match form {
        Value::String(s) => s.clone(),
        // numbers, booleans and nested values use their compact JSON text
        other => other.to_string(),
    }
}

// falsy values that count as "no base forms"
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Array(_) => false,
    }
}
