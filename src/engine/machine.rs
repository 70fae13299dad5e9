//! The submit/validate state machine.

use crate::builder::FormEngineBuilder;
use crate::core::{
    FieldErrors, FieldValues, FormState, SubmitHistory, SubmitOutcome, SubmitPhase, SubmitRecord,
};
use crate::engine::registry::CaptureHandler;
use crate::validate::{validate_submission, FailurePolicy, Schema, ValidationReport};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Callback invoked with the value snapshot when a submit attempt reaches
/// the `Valid` terminal.
pub type SubmitCallback = Arc<dyn Fn(&FieldValues) + Send + Sync>;

/// Observer invoked with the full state snapshot after every submit
/// attempt. Never invoked on mere field edits.
pub type StateChangeCallback = Arc<dyn Fn(&FormState) + Send + Sync>;

/// The shared state of one form instance.
pub(crate) struct Shared {
    pub(crate) values: FieldValues,
    pub(crate) submit_count: usize,
    pub(crate) is_dirty: bool,
    pub(crate) is_invalid: bool,
    pub(crate) field_errors: FieldErrors,
    pub(crate) phase: SubmitPhase,
    pub(crate) pass_seq: u64,
    pub(crate) history: SubmitHistory,
}

impl Shared {
    fn new(initial_submit_count: usize) -> Self {
        Self {
            values: FieldValues::new(),
            submit_count: initial_submit_count,
            is_dirty: false,
            is_invalid: false,
            field_errors: FieldErrors::new(),
            phase: SubmitPhase::Idle,
            pass_seq: 0,
            history: SubmitHistory::new(),
        }
    }

    fn snapshot(&self) -> FormState {
        FormState {
            submit_count: self.submit_count,
            is_dirty: self.is_dirty,
            is_invalid: self.is_invalid,
            field_errors: self.field_errors.clone(),
            values: self.values.clone(),
        }
    }
}

/// The event that triggered a submit attempt.
///
/// Its default action is marked prevented synchronously at the top of
/// [`FormEngine::handle_submit`], before any asynchronous work, so a slow
/// validation pass cannot let the default action fire twice.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: AtomicBool,
}

impl SubmitEvent {
    /// Create a fresh event with the default action not yet prevented.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the default action as prevented.
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    /// Check whether the default action has been prevented.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

/// A form instance: field registry plus submit/validate state machine.
///
/// Cloning is cheap and every clone refers to the same instance; this is
/// how capture handlers, spawned submit attempts, and the annotator all
/// observe one consistent state.
#[derive(Clone)]
pub struct FormEngine {
    shared: Arc<Mutex<Shared>>,
    submit: SubmitCallback,
    state_change: Option<StateChangeCallback>,
    schema: Option<Arc<dyn Schema>>,
    failure_policy: FailurePolicy,
}

impl std::fmt::Debug for FormEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEngine")
            .field("state_change", &self.state_change.is_some())
            .field("schema", &self.schema.is_some())
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

impl FormEngine {
    /// Start building a form engine.
    pub fn builder() -> FormEngineBuilder {
        FormEngineBuilder::new()
    }

    pub(crate) fn from_parts(
        submit: SubmitCallback,
        state_change: Option<StateChangeCallback>,
        schema: Option<Arc<dyn Schema>>,
        failure_policy: FailurePolicy,
        initial_submit_count: usize,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::new(initial_submit_count))),
            submit,
            state_change,
            schema,
            failure_policy,
        }
    }

    fn shared(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().expect("form engine state poisoned")
    }

    /// Register a field, returning its capture handler.
    ///
    /// Idempotent: registering an already-known field returns an
    /// equivalent handler and leaves the stored value untouched. A new
    /// field starts with the empty string.
    pub fn register(&self, name: &str) -> CaptureHandler {
        self.shared().values.ensure(name);
        CaptureHandler::new(Arc::clone(&self.shared), name)
    }

    /// Point-in-time snapshot of the full form state, value bag included.
    pub fn form_state(&self) -> FormState {
        self.shared().snapshot()
    }

    /// Point-in-time copy of the value bag.
    pub fn values(&self) -> FieldValues {
        self.shared().values.clone()
    }

    /// Current phase of the submit cycle.
    pub fn phase(&self) -> SubmitPhase {
        self.shared().phase
    }

    /// History of processed submit attempts.
    pub fn submit_history(&self) -> SubmitHistory {
        self.shared().history.clone()
    }

    /// Drive one submit attempt through the cycle.
    ///
    /// Prevents the event's default action, runs the validation fan-out
    /// against a snapshot of the current values, then processes the
    /// terminal: on `Valid` the submit callback receives the value bag,
    /// on `Invalid` the error map is replaced and the callback is not
    /// invoked. Either way the submit count grows by one, the attempt is
    /// recorded, and the state-change observer (if any) is notified.
    ///
    /// Overlapping attempts are bounded by pass numbers: when a newer
    /// attempt starts while this one is suspended in validation, this
    /// one completes as [`SubmitOutcome::Discarded`] without writing
    /// errors or invoking the submit callback.
    pub async fn handle_submit(&self, event: &SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let (pass, values) = {
            let mut shared = self.shared();
            shared.pass_seq += 1;
            shared.phase = SubmitPhase::Validating;
            (shared.pass_seq, shared.values.clone())
        };
        debug!(pass, fields = values.len(), "validation pass started");

        let report = match &self.schema {
            Some(schema) => {
                validate_submission(schema.as_ref(), &values, self.failure_policy).await
            }
            None => ValidationReport::default(),
        };

        let (outcome, state) = {
            let mut shared = self.shared();
            let stale = pass != shared.pass_seq;
            let outcome = if stale {
                SubmitOutcome::Discarded
            } else if report.is_invalid {
                shared.field_errors = report.field_errors;
                shared.is_invalid = true;
                shared.phase = SubmitPhase::Invalid;
                SubmitOutcome::Rejected
            } else {
                shared.field_errors = FieldErrors::new();
                shared.is_invalid = false;
                shared.phase = SubmitPhase::Valid;
                SubmitOutcome::Submitted
            };
            shared.submit_count += 1;
            let record = SubmitRecord {
                submit_number: shared.submit_count,
                outcome,
                at: Utc::now(),
            };
            shared.history = shared.history.record(record);
            (outcome, shared.snapshot())
        };
        debug!(
            pass,
            outcome = outcome.name(),
            submit_count = state.submit_count,
            "submit attempt processed"
        );

        if outcome == SubmitOutcome::Submitted {
            (self.submit)(&state.values);
        }
        if let Some(observer) = &self.state_change {
            // Only after at least one attempt, never on mere edits.
            if state.submit_count > 0 {
                observer(&state);
            }
        }

        {
            let mut shared = self.shared();
            // A newer pass may own the phase by now.
            if pass == shared.pass_seq {
                shared.phase = SubmitPhase::Idle;
            }
        }
        outcome
    }
}
