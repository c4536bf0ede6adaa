//! Shared UI state: which example is currently open.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::catalog::ExampleDescriptor;

/// Handle to the single shared slot tracking the open example.
///
/// The slot is created once by the root of the shell and reachable from
/// anywhere in the tree via [`use_app_state`]. The handle is `Copy`;
/// consumers re-read on every render instead of holding a descriptor of
/// their own. Exactly one writer is active at a time, the screen that is
/// currently displayed.
#[derive(Clone, Copy)]
pub struct AppState {
    current_example: Signal<ExampleDescriptor>,
}

impl AppState {
    /// Creates the slot, empty, and provides the handle to the subtree.
    /// Called exactly once, from the root component of the shell.
    pub fn provide() -> Self {
        let current_example = use_signal(ExampleDescriptor::default);
        use_context_provider(|| Self { current_example })
    }

    /// The descriptor of the example currently open, or the empty
    /// descriptor while the visitor is on the home page. Never fails.
    /// Subscribes the calling scope, so a later write re-renders it.
    pub fn current_example(&self) -> ExampleDescriptor {
        self.current_example.read().clone()
    }

    /// Replaces the slot. Last write wins; no validation, no merging.
    pub fn set_current_example(&mut self, example: ExampleDescriptor) {
        debug!(title = %example.title, path = %example.path, "current example changed");
        self.current_example.set(example);
    }
}

/// The shared state handle, from any component below the shell root.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
