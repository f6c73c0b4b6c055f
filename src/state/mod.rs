//! Widget state: field configs, the value matrix, and render sync.
//!
//! DESIGN
//! ======
//! Everything here is framework-free so the trailing-row policy can be tested
//! without a browser. The Leptos component only wires events to
//! `input::RowMatrixInputState`.

pub mod fields;
pub mod input;
pub mod matrix;
pub mod props;
pub mod sync;
pub mod view;
