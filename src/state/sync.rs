//! Notify-on-write cell with one-shot post-render callbacks.
//!
//! ARCHITECTURE
//! ============
//! `set` replaces the value and marks a render as pending. The renderer calls
//! `mark_rendered` after the DOM reflects the value, which drains the
//! callbacks queued through `once_settled`. Several writes before a render
//! settle together, so each queued callback fires exactly once.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::fmt;

type SettledCallback<T> = Box<dyn FnOnce(&T)>;

/// Observable value holder used by the headless widget state.
pub struct SyncCell<T> {
    value: T,
    version: u64,
    rendered_version: u64,
    settled: Vec<SettledCallback<T>>,
}

impl<T> SyncCell<T> {
    /// Wrap an initial value. Construction does not schedule a render.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, version: 0, rendered_version: 0, settled: Vec::new() }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and schedule a render.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.version += 1;
    }

    /// Number of writes since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn is_render_pending(&self) -> bool {
        self.version != self.rendered_version
    }

    /// Queue `callback` to run once, after the next completed render.
    pub fn once_settled(&mut self, callback: impl FnOnce(&T) + 'static) {
        self.settled.push(Box::new(callback));
    }

    /// Number of callbacks still waiting for a render.
    #[must_use]
    pub fn pending_callbacks(&self) -> usize {
        self.settled.len()
    }

    /// Record that a render finished.
    ///
    /// Returns `false` and leaves queued callbacks in place when no write
    /// happened since the previous render.
    pub fn mark_rendered(&mut self) -> bool {
        if !self.is_render_pending() {
            return false;
        }
        self.rendered_version = self.version;
        for callback in std::mem::take(&mut self.settled) {
            callback(&self.value);
        }
        true
    }
}

impl<T: Default> Default for SyncCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncCell")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("rendered_version", &self.rendered_version)
            .field("settled", &self.settled.len())
            .finish()
    }
}
