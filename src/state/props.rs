//! Construction props decoded from loosely-typed JSON.
//!
//! Server-rendered pages and embedding scripts hand the widget its config as
//! JSON. Both keys must be arrays when present; everything inside them is
//! coerced rather than rejected.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use serde_json::Value;

use super::fields::FieldConfig;
use super::matrix::{Row, ValuesInput};

const FIELDS_CONFIG_KEY: &str = "fieldsConfig";
const VALUES_KEY: &str = "values";

/// Error returned by [`RowMatrixProps::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    /// The text is not valid JSON.
    #[error("failed to parse props: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level value is not a JSON object.
    #[error("props must be a JSON object")]
    NotAnObject,
    /// A props key holds something other than an array.
    #[error("`{0}` must be an array")]
    NotAnArray(&'static str),
}

/// Typed construction parameters for the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowMatrixProps {
    pub fields_config: Vec<FieldConfig>,
    pub values: ValuesInput,
}

impl RowMatrixProps {
    /// Parse props from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError`] when the text is not a JSON object or either
    /// key holds a non-array value.
    pub fn from_json(text: &str) -> Result<Self, PropsError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Decode props from an already-parsed JSON value.
    ///
    /// Missing or `null` keys fall back to the widget defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError`] when `value` is not an object or either key
    /// holds a non-array value.
    pub fn from_value(value: &Value) -> Result<Self, PropsError> {
        let object = value.as_object().ok_or(PropsError::NotAnObject)?;

        let fields_config = match array_entry(object.get(FIELDS_CONFIG_KEY), FIELDS_CONFIG_KEY)? {
            Some(entries) => entries.iter().enumerate().map(|(i, entry)| decode_field(i, entry)).collect(),
            None => Vec::new(),
        };
        let values = match array_entry(object.get(VALUES_KEY), VALUES_KEY)? {
            Some(entries) => decode_values(entries),
            None => ValuesInput::default(),
        };

        Ok(Self { fields_config, values })
    }
}

fn array_entry<'a>(value: Option<&'a Value>, key: &'static str) -> Result<Option<&'a [Value]>, PropsError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(entries)) => Ok(Some(entries.as_slice())),
        Some(_) => Err(PropsError::NotAnArray(key)),
    }
}

fn decode_field(index: usize, entry: &Value) -> FieldConfig {
    match serde_json::from_value::<FieldConfig>(entry.clone()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(index, error = %e, "unusable field config; using defaults");
            FieldConfig::default()
        }
    }
}

/// Nested arrays are rows; a flat array of scalars is the single-row
/// variant. A scalar mixed in among rows becomes a one-cell row.
fn decode_values(entries: &[Value]) -> ValuesInput {
    if !entries.iter().any(Value::is_array) {
        return ValuesInput::Flat(entries.iter().map(stringify).collect());
    }
    let rows = entries
        .iter()
        .map(|entry| match entry {
            Value::Array(cells) => cells.iter().map(stringify).collect::<Row>(),
            scalar => vec![stringify(scalar)],
        })
        .collect();
    ValuesInput::Rows(rows)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            tracing::warn!("nested value in matrix cell; storing its JSON text");
            value.to_string()
        }
    }
}
