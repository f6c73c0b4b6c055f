//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render widget chrome and forward DOM events to the headless
//! state in `crate::state`.

pub mod row_matrix_input;
