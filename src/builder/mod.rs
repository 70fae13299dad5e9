//! Builder API for form engine construction.
//!
//! Construction is the one place configuration can fail, and it fails
//! with a typed error rather than a crash mid-submission.

mod error;

pub use error::BuildError;

use crate::core::{FieldValues, FormState};
use crate::engine::{FormEngine, StateChangeCallback, SubmitCallback};
use crate::validate::{FailurePolicy, Schema};
use std::sync::Arc;

/// Builder for [`FormEngine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use formwork::FormEngine;
///
/// let engine = FormEngine::builder()
///     .on_submit(|values| println!("submitted {} fields", values.len()))
///     .build()
///     .unwrap();
/// # let _ = engine;
/// ```
pub struct FormEngineBuilder {
    submit: Option<SubmitCallback>,
    state_change: Option<StateChangeCallback>,
    schema: Option<Arc<dyn Schema>>,
    failure_policy: FailurePolicy,
    initial_submit_count: usize,
}

impl FormEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            submit: None,
            state_change: None,
            schema: None,
            failure_policy: FailurePolicy::default(),
            initial_submit_count: 0,
        }
    }

    /// Set the submit callback (required). Invoked with the value bag
    /// when a submit attempt reaches the `Valid` terminal.
    pub fn on_submit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FieldValues) + Send + Sync + 'static,
    {
        self.submit = Some(Arc::new(callback));
        self
    }

    /// Set the state-change observer (optional). Invoked with the full
    /// state snapshot after every submit attempt, rejected ones included.
    pub fn on_state_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FormState) + Send + Sync + 'static,
    {
        self.state_change = Some(Arc::new(callback));
        self
    }

    /// Set the validation collaborator (optional). Without one, every
    /// submit attempt proceeds as valid.
    pub fn schema(mut self, schema: impl Schema + 'static) -> Self {
        self.schema = Some(Arc::new(schema));
        self
    }

    /// Choose how internal collaborator failures affect their field
    /// (optional, defaults to [`FailurePolicy::PassField`]).
    pub fn on_schema_failure(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Start the submit counter above zero, for forms resuming an
    /// earlier session (optional).
    pub fn initial_submit_count(mut self, count: usize) -> Self {
        self.initial_submit_count = count;
        self
    }

    /// Build the form engine.
    /// Returns an error if required configuration is missing.
    pub fn build(self) -> Result<FormEngine, BuildError> {
        let submit = self.submit.ok_or(BuildError::MissingSubmitCallback)?;

        Ok(FormEngine::from_parts(
            submit,
            self.state_change,
            self.schema,
            self.failure_policy,
            self.initial_submit_count,
        ))
    }
}

impl Default for FormEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
