//! Headless multi-row input: field configs plus the synced value matrix.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `RowMatrixInput` component keeps one of these in a local signal and
//! forwards DOM events to `on_field_input` / `on_remove_row`. Tests drive it
//! directly and call `mark_rendered` where the browser would finish a render.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use super::fields::{FieldConfig, normalize_fields};
use super::matrix::{ValuesInput, ValuesMatrix};
use super::props::RowMatrixProps;
use super::sync::SyncCell;
use super::view::{self, RowMatrixView, RowView};

/// State behind one multi-row input widget.
#[derive(Debug)]
pub struct RowMatrixInputState {
    fields: Vec<FieldConfig>,
    values: SyncCell<ValuesMatrix>,
}

impl Default for RowMatrixInputState {
    fn default() -> Self {
        Self::new(Vec::new(), ValuesInput::default())
    }
}

impl RowMatrixInputState {
    /// Build the widget state. An empty `fields` list means one unlabeled
    /// column; `values` is shaped to the columns and gets a trailing empty
    /// row when its last row is in use.
    #[must_use]
    pub fn new(fields: Vec<FieldConfig>, values: ValuesInput) -> Self {
        let fields = normalize_fields(fields);
        let matrix = ValuesMatrix::normalized(values, &fields);
        tracing::debug!(columns = fields.len(), rows = matrix.row_count(), "row matrix input created");
        Self { fields, values: SyncCell::new(matrix) }
    }

    #[must_use]
    pub fn from_props(props: RowMatrixProps) -> Self {
        Self::new(props.fields_config, props.values)
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldConfig] {
        &self.fields
    }

    /// Current matrix. After an edit it is authoritative for the DOM only
    /// once the next render has settled.
    #[must_use]
    pub fn values(&self) -> &ValuesMatrix {
        self.values.get()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.values.get().row_count()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    /// Handle an input event from field `field_index` of row `row_index`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range for the current matrix.
    pub fn on_field_input(&mut self, row_index: usize, field_index: usize, value: String) {
        let mut next = self.values.get().clone();
        let appended = next.apply_field_input(&self.fields, row_index, field_index, value);
        tracing::debug!(row = row_index, field = field_index, appended, rows = next.row_count(), "field input");
        self.values.set(next);
    }

    /// Handle a click on the remove control of row `row_index`.
    ///
    /// # Panics
    ///
    /// Panics when `row_index` is out of range for the current matrix.
    pub fn on_remove_row(&mut self, row_index: usize) {
        let mut next = self.values.get().clone();
        next.remove_row(row_index);
        tracing::debug!(row = row_index, rows = next.row_count(), "row removed");
        self.values.set(next);
    }

    /// Run `callback` with the matrix once the next render has completed.
    pub fn once_settled(&mut self, callback: impl FnOnce(&ValuesMatrix) + 'static) {
        self.values.once_settled(callback);
    }

    #[must_use]
    pub fn is_render_pending(&self) -> bool {
        self.values.is_render_pending()
    }

    /// Called by the renderer after the DOM reflects the current matrix.
    ///
    /// Returns `true` when this completed a pending render, i.e. when a
    /// "state synchronized" notification is due.
    pub fn mark_rendered(&mut self) -> bool {
        let settled = self.values.mark_rendered();
        if settled {
            tracing::trace!(version = self.values.version(), "row matrix state synced");
        }
        settled
    }

    /// Render data for one row of the current matrix.
    #[must_use]
    pub fn row_view(&self, row_index: usize) -> RowView {
        view::row_view(&self.fields, self.values.get(), row_index)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        view::labels(&self.fields)
    }

    #[must_use]
    pub fn render_model(&self) -> RowMatrixView {
        view::build(&self.fields, self.values.get())
    }
}
