//! Field registration and value capture.

use super::machine::Shared;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::trace;

/// An input event carrying the raw value to capture.
///
/// The registry never fails: whatever value the event carries is stored
/// as-is and flows downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputEvent {
    value: String,
}

impl InputEvent {
    /// Create an event from the input's current value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The value carried by the event.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Capture callback bound to one registered field.
///
/// Handlers are cheap to clone; every clone for the same field writes to
/// the same storage. Re-registering a field yields an equivalent handler
/// without resetting the stored value.
#[derive(Clone)]
pub struct CaptureHandler {
    shared: Arc<Mutex<Shared>>,
    name: String,
}

impl CaptureHandler {
    pub(crate) fn new(shared: Arc<Mutex<Shared>>, name: &str) -> Self {
        Self {
            shared,
            name: name.to_string(),
        }
    }

    /// The field this handler captures for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store the event's value under this handler's field, overwriting
    /// any prior value. The first capture anywhere in the form marks the
    /// form dirty; the flag never resets afterwards.
    pub fn capture(&self, event: &InputEvent) {
        let mut shared = self.shared.lock().expect("form engine state poisoned");
        if !shared.is_dirty {
            shared.is_dirty = true;
        }
        shared.values.set(&self.name, event.value());
        trace!(field = %self.name, "captured input value");
    }
}

impl fmt::Debug for CaptureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FormEngine;

    fn engine() -> FormEngine {
        FormEngine::builder()
            .on_submit(|_| {})
            .build()
            .expect("engine should build")
    }

    #[test]
    fn registration_initializes_value_to_empty_string() {
        let engine = engine();
        engine.register("one");

        assert_eq!(engine.values().get("one"), Some(""));
    }

    #[test]
    fn registration_is_idempotent() {
        let engine = engine();
        let first = engine.register("one");
        first.capture(&InputEvent::new("meow"));

        let second = engine.register("one");
        assert_eq!(engine.values().get("one"), Some("meow"));

        second.capture(&InputEvent::new("woof"));
        assert_eq!(engine.values().get("one"), Some("woof"));
    }

    #[test]
    fn capture_overwrites_prior_value() {
        let engine = engine();
        let handler = engine.register("one");

        handler.capture(&InputEvent::new("meow"));
        handler.capture(&InputEvent::new("woof"));

        assert_eq!(engine.values().get("one"), Some("woof"));
    }

    #[test]
    fn first_capture_marks_form_dirty_once() {
        let engine = engine();
        let one = engine.register("one");
        let two = engine.register("two");

        assert!(!engine.form_state().is_dirty);

        one.capture(&InputEvent::new("meow"));
        assert!(engine.form_state().is_dirty);

        two.capture(&InputEvent::new("woof"));
        assert!(engine.form_state().is_dirty);
    }

    #[test]
    fn cloned_handler_shares_storage() {
        let engine = engine();
        let handler = engine.register("one");
        let clone = handler.clone();

        clone.capture(&InputEvent::new("meow"));
        assert_eq!(engine.values().get("one"), Some("meow"));
    }

    #[test]
    fn duplicate_registrations_share_storage() {
        let engine = engine();
        let first = engine.register("one");
        let second = engine.register("one");

        first.capture(&InputEvent::new("meow"));
        second.capture(&InputEvent::new("woof"));

        // Last capture wins; precedence between duplicates is undefined
        // beyond that.
        assert_eq!(engine.values().get("one"), Some("woof"));
        assert_eq!(engine.values().len(), 1);
    }

    #[test]
    fn snapshot_mutation_does_not_reach_the_registry() {
        let engine = engine();
        let handler = engine.register("one");
        handler.capture(&InputEvent::new("meow"));

        let mut snapshot = engine.values();
        snapshot.set("one", "tampered");

        assert_eq!(engine.values().get("one"), Some("meow"));
    }
}
