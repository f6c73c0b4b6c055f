//! Row-major value matrix and its edit transitions.
//!
//! DESIGN
//! ======
//! The matrix always keeps one cell per configured column in every row. The
//! trailing-row policy lives here so the headless state and the Leptos
//! component share a single implementation:
//!
//! - an input on the last row appends a fresh empty row, unless the edited
//!   column has duplication disabled;
//! - removing a row never appends, even when it leaves no empty trailing row.

#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;

use serde::Serialize;

use super::fields::FieldConfig;

/// One cell per configured column.
pub type Row = Vec<String>;

/// Initial values supplied by a caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValuesInput {
    /// One inner list per row.
    Rows(Vec<Row>),
    /// Single-row variant: one entry per row, placed in the first column.
    Flat(Vec<String>),
}

impl Default for ValuesInput {
    fn default() -> Self {
        Self::Rows(Vec::new())
    }
}

impl ValuesInput {
    /// Convert into row lists without shape normalization.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Rows(rows) => rows,
            Self::Flat(values) => values.into_iter().map(|value| vec![value]).collect(),
        }
    }
}

impl From<Vec<Row>> for ValuesInput {
    fn from(rows: Vec<Row>) -> Self {
        Self::Rows(rows)
    }
}

impl From<Vec<String>> for ValuesInput {
    fn from(values: Vec<String>) -> Self {
        Self::Flat(values)
    }
}

/// The values of every rendered input, row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValuesMatrix {
    rows: Vec<Row>,
}

impl ValuesMatrix {
    /// Build a matrix shaped for `fields`.
    ///
    /// Rows are padded with empty strings or truncated to the column count,
    /// an empty input becomes a single empty row, and the trailing-row rule
    /// is applied once.
    #[must_use]
    pub fn normalized(input: ValuesInput, fields: &[FieldConfig]) -> Self {
        let columns = fields.len();
        let mut rows: Vec<Row> = input
            .into_rows()
            .into_iter()
            .map(|mut row| {
                row.resize(columns, String::new());
                row
            })
            .collect();
        if rows.is_empty() {
            rows.push(empty_row(columns));
        }

        let mut matrix = Self { rows };
        if matrix.needs_trailing_row(fields) {
            matrix.rows.push(empty_row(columns));
        }
        matrix
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value, or `None` when either index is out of range.
    #[must_use]
    pub fn get(&self, row_index: usize, field_index: usize) -> Option<&str> {
        self.rows
            .get(row_index)
            .and_then(|row| row.get(field_index))
            .map(String::as_str)
    }

    /// Whether the last row has been used in a column that allows
    /// duplication, so a fresh empty row must follow it.
    #[must_use]
    pub fn needs_trailing_row(&self, fields: &[FieldConfig]) -> bool {
        self.rows.last().is_some_and(|last| {
            last.iter()
                .zip(fields)
                .any(|(value, config)| config.allows_duplication() && !value.is_empty())
        })
    }

    /// Write `value` into a cell and apply the trailing-row rule.
    ///
    /// Returns `true` when a row was appended. The new value itself is not
    /// inspected: any input on the last row of a duplicating column appends.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range. Indices come from the
    /// rendered rows, so a bad index is a caller bug.
    pub fn apply_field_input(
        &mut self,
        fields: &[FieldConfig],
        row_index: usize,
        field_index: usize,
        value: String,
    ) -> bool {
        let row_count = self.rows.len();
        assert!(row_index < row_count, "row index {row_index} out of range for {row_count} rows");
        let columns = fields.len().min(self.rows[row_index].len());
        assert!(field_index < columns, "field index {field_index} out of range for {columns} columns");

        self.rows[row_index][field_index] = value;

        let last = row_index + 1 == row_count;
        if last && fields[field_index].allows_duplication() {
            self.rows.push(empty_row(fields.len()));
            return true;
        }
        false
    }

    /// Delete a row, shifting later rows up by one.
    ///
    /// # Panics
    ///
    /// Panics when `row_index` is out of range.
    pub fn remove_row(&mut self, row_index: usize) -> Row {
        let row_count = self.rows.len();
        assert!(row_index < row_count, "row index {row_index} out of range for {row_count} rows");
        self.rows.remove(row_index)
    }
}

/// A row of empty strings, one per column.
#[must_use]
pub fn empty_row(columns: usize) -> Row {
    vec![String::new(); columns]
}
