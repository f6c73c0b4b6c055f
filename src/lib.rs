//! # row-matrix-input
//!
//! Leptos widget that renders a dynamic list of input rows and keeps a value
//! matrix in step with user edits. A fresh empty row is appended whenever the
//! last row is typed into, and any row but the last can be removed.
//!
//! The trailing-row policy and render sync live in [`state`] and do not need
//! a browser; [`components`] holds the Leptos view.
//!
//! ## Logging
//!
//! Edits and props coercions are reported through `tracing` (`debug` per
//! transition, `warn` for coerced props). The crate never installs a
//! subscriber, the `hydrate` entry included: the host application must
//! install one to see these events.

pub mod app;
pub mod components;
pub mod state;

/// WASM entry point: hydrate the server-rendered demo app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
