//! Form state snapshot and submit-cycle types.
//!
//! `FormState` is the point-in-time view of a form instance. It is plain
//! data: the engine hands out clones, and mutating a clone has no effect
//! on the engine.

use super::values::FieldValues;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field error messages from the latest validation pass.
///
/// The map is replaced wholesale after every pass, never merged.
pub type FieldErrors = BTreeMap<String, String>;

/// Snapshot of a form instance.
///
/// Created with `submit_count` at the configured starting value (zero by
/// default), clean, valid, and with no errors. `is_dirty` flips to `true`
/// on the first capture event anywhere in the form and never resets for
/// the lifetime of the instance. `submit_count` grows by exactly one per
/// submit attempt, whatever the outcome.
///
/// # Example
///
/// ```rust
/// use formwork::core::FormState;
///
/// let state = FormState::default();
/// assert_eq!(state.submit_count, 0);
/// assert!(!state.is_dirty);
/// assert!(!state.is_invalid);
/// assert!(state.field_errors.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    /// Number of submit attempts so far, valid or not.
    pub submit_count: usize,
    /// Whether any field has received a capture event.
    pub is_dirty: bool,
    /// Whether the latest validation pass rejected the form.
    pub is_invalid: bool,
    /// Error messages from the latest validation pass, by field name.
    pub field_errors: FieldErrors,
    /// Copy of the value bag at snapshot time.
    pub values: FieldValues,
}

impl FormState {
    /// Get the error message for a field, if the latest pass produced one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formwork::core::FormState;
    ///
    /// let mut state = FormState::default();
    /// state
    ///     .field_errors
    ///     .insert("email".to_string(), "email is required".to_string());
    ///
    /// assert_eq!(state.error("email"), Some("email is required"));
    /// assert_eq!(state.error("password"), None);
    /// ```
    pub fn error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

/// Phase of the submit cycle.
///
/// Each submit attempt traverses `Idle -> Validating -> {Valid, Invalid}`
/// and returns to `Idle` once the terminal has been processed. With no
/// schema configured, `Validating` is passed through without suspending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitPhase {
    /// Waiting for a submit attempt.
    Idle,
    /// A validation pass is in flight.
    Validating,
    /// The latest pass accepted the form.
    Valid,
    /// The latest pass rejected the form.
    Invalid,
}

impl SubmitPhase {
    /// Get the phase's name for display and logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }

    /// Check if this is a terminal of the submit cycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Valid | Self::Invalid)
    }
}

/// Outcome of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The form was valid and the submit callback ran.
    Submitted,
    /// The form was invalid; errors were surfaced, the callback did not run.
    Rejected,
    /// A newer pass started while this one was in flight; its results
    /// were dropped without touching errors or invoking the callback.
    Discarded,
}

impl SubmitOutcome {
    /// Get the outcome's name for display and logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Submitted => "Submitted",
            Self::Rejected => "Rejected",
            Self::Discarded => "Discarded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_pristine() {
        let state = FormState::default();
        assert_eq!(state.submit_count, 0);
        assert!(!state.is_dirty);
        assert!(!state.is_invalid);
        assert!(state.field_errors.is_empty());
        assert!(state.values.is_empty());
    }

    #[test]
    fn error_looks_up_field_message() {
        let mut state = FormState::default();
        state
            .field_errors
            .insert("one".to_string(), "required".to_string());

        assert_eq!(state.error("one"), Some("required"));
        assert_eq!(state.error("two"), None);
    }

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(SubmitPhase::Idle.name(), "Idle");
        assert_eq!(SubmitPhase::Validating.name(), "Validating");
        assert_eq!(SubmitPhase::Valid.name(), "Valid");
        assert_eq!(SubmitPhase::Invalid.name(), "Invalid");
    }

    #[test]
    fn is_terminal_identifies_cycle_terminals() {
        assert!(!SubmitPhase::Idle.is_terminal());
        assert!(!SubmitPhase::Validating.is_terminal());
        assert!(SubmitPhase::Valid.is_terminal());
        assert!(SubmitPhase::Invalid.is_terminal());
    }

    #[test]
    fn outcome_name_returns_correct_value() {
        assert_eq!(SubmitOutcome::Submitted.name(), "Submitted");
        assert_eq!(SubmitOutcome::Rejected.name(), "Rejected");
        assert_eq!(SubmitOutcome::Discarded.name(), "Discarded");
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = FormState::default();
        state
            .field_errors
            .insert("one".to_string(), "required".to_string());
        state.is_invalid = true;
        state.submit_count = 3;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: FormState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
