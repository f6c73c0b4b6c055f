//! Static per-column field descriptors.
//!
//! DESIGN
//! ======
//! The column list is fixed when the widget is constructed. Every row of the
//! value matrix has exactly one cell per entry, in the same order.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use serde::{Deserialize, Serialize};

/// Configuration for one column of inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Base name; rendered with a 1-based row suffix (`age` -> `age1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Header text shown above the column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown in every input of the column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// When set, typing in this column on the last row does not add a row.
    pub disable_duplication: bool,
}

impl FieldConfig {
    /// A column with the given base name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn without_duplication(mut self) -> Self {
        self.disable_duplication = true;
        self
    }

    /// Whether edits in this column may trigger the trailing-row append.
    #[must_use]
    pub fn allows_duplication(&self) -> bool {
        !self.disable_duplication
    }

    /// Rendered `name` attribute for the input at `row_index`.
    ///
    /// Unnamed columns render an empty name.
    #[must_use]
    pub fn field_name(&self, row_index: usize) -> String {
        self.name
            .as_deref()
            .map_or_else(String::new, |name| format!("{name}{}", row_index + 1))
    }

    #[must_use]
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn placeholder_text(&self) -> &str {
        self.placeholder.as_deref().unwrap_or_default()
    }
}

/// Column list used when the caller supplies none: one unlabeled column.
#[must_use]
pub fn default_fields() -> Vec<FieldConfig> {
    vec![FieldConfig::default()]
}

/// Replace an empty column list with [`default_fields`].
#[must_use]
pub fn normalize_fields(fields: Vec<FieldConfig>) -> Vec<FieldConfig> {
    if fields.is_empty() { default_fields() } else { fields }
}
