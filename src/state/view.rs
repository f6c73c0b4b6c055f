//! Render model derived from field configs and the value matrix.
//!
//! The Leptos component builds each row from [`row_view`] and the header from
//! [`labels`]; [`build`] flattens the whole snapshot.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::fields::FieldConfig;
use super::matrix::ValuesMatrix;

/// One rendered input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub field_index: usize,
    pub name: String,
    pub placeholder: String,
    pub value: String,
}

/// One rendered row of inputs plus its optional remove control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub row_index: usize,
    pub removable: bool,
    pub fields: Vec<FieldView>,
}

/// Full widget snapshot: the labels header followed by every row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMatrixView {
    pub labels: Vec<String>,
    pub rows: Vec<RowView>,
}

/// The last row is the placeholder for the next entry and is never removable.
#[must_use]
pub fn is_removable(row_index: usize, row_count: usize) -> bool {
    row_index + 1 < row_count
}

/// Header text for each column, empty when unset.
#[must_use]
pub fn labels(fields: &[FieldConfig]) -> Vec<String> {
    fields.iter().map(|config| config.label_text().to_owned()).collect()
}

/// Render data for one row as it stands in `matrix`.
///
/// Columns come from `fields`; a cell missing from the matrix renders empty.
#[must_use]
pub fn row_view(fields: &[FieldConfig], matrix: &ValuesMatrix, row_index: usize) -> RowView {
    RowView {
        row_index,
        removable: is_removable(row_index, matrix.row_count()),
        fields: fields
            .iter()
            .enumerate()
            .map(|(field_index, config)| FieldView {
                field_index,
                name: config.field_name(row_index),
                placeholder: config.placeholder_text().to_owned(),
                value: matrix.get(row_index, field_index).unwrap_or_default().to_owned(),
            })
            .collect(),
    }
}

#[must_use]
pub fn build(fields: &[FieldConfig], matrix: &ValuesMatrix) -> RowMatrixView {
    let rows = (0..matrix.row_count())
        .map(|row_index| row_view(fields, matrix, row_index))
        .collect();
    RowMatrixView { labels: labels(fields), rows }
}
