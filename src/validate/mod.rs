//! The validation collaborator boundary.
//!
//! The engine does not know any rule language. It consumes validation as
//! "check one field against all current values, give back a message or
//! nothing", fanned out concurrently over every known field and joined
//! before the submit cycle proceeds. This fan-out is the only suspension
//! point in the whole system.

use crate::core::{FieldErrors, FieldValues};
use async_trait::async_trait;
use futures::future::join_all;
use thiserror::Error;
use tracing::debug;

/// Internal failure of the validation collaborator for one field.
///
/// Distinct from a validation failure, which is ordinary data (a message
/// for the field). How a `SchemaError` affects the pass is decided by the
/// configured [`FailurePolicy`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("schema collaborator failed: {0}")]
pub struct SchemaError(pub String);

impl SchemaError {
    /// Create a failure with a reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// External validation collaborator.
///
/// `validate_field` checks one field against the full value bag.
/// `Ok(None)` means the field passes, `Ok(Some(message))` means it fails
/// with that message, and `Err` is an internal collaborator failure
/// routed through the [`FailurePolicy`].
///
/// Field validations must be independent: the engine issues them
/// concurrently and in no particular order.
///
/// # Example
///
/// ```rust
/// use formwork::core::FieldValues;
/// use formwork::validate::schema_fn;
///
/// let schema = schema_fn(|field: &str, values: &FieldValues| {
///     if field == "email" && values.get("email") == Some("") {
///         Ok(Some("email is required".to_string()))
///     } else {
///         Ok(None)
///     }
/// });
/// # let _ = schema;
/// ```
#[async_trait]
pub trait Schema: Send + Sync {
    /// Validate one field against all current values.
    async fn validate_field(
        &self,
        field: &str,
        values: &FieldValues,
    ) -> Result<Option<String>, SchemaError>;
}

/// What an internal collaborator failure means for the affected field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The field counts as valid; the failure is logged and swallowed.
    #[default]
    PassField,
    /// The failure text becomes the field's error message.
    FailField,
}

/// A [`Schema`] backed by a plain function.
///
/// Built with [`schema_fn`]; saves a trait impl for simple rules.
pub struct FnSchema<F> {
    rule: F,
}

/// Wrap a plain function as a [`Schema`].
///
/// # Example
///
/// ```rust
/// use formwork::core::FieldValues;
/// use formwork::validate::schema_fn;
///
/// let non_empty = schema_fn(|field: &str, values: &FieldValues| {
///     match values.get(field) {
///         Some("") => Ok(Some(format!("{field} must not be empty"))),
///         _ => Ok(None),
///     }
/// });
/// # let _ = non_empty;
/// ```
pub fn schema_fn<F>(rule: F) -> FnSchema<F>
where
    F: Fn(&str, &FieldValues) -> Result<Option<String>, SchemaError> + Send + Sync,
{
    FnSchema { rule }
}

#[async_trait]
impl<F> Schema for FnSchema<F>
where
    F: Fn(&str, &FieldValues) -> Result<Option<String>, SchemaError> + Send + Sync,
{
    async fn validate_field(
        &self,
        field: &str,
        values: &FieldValues,
    ) -> Result<Option<String>, SchemaError> {
        (self.rule)(field, values)
    }
}

/// Result of one validation pass over the whole form.
///
/// Replaces the previous pass's result wholesale; per-field messages are
/// never merged across passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    /// Logical OR across all per-field results.
    pub is_invalid: bool,
    /// Messages for the fields that failed, by field name.
    pub field_errors: FieldErrors,
}

/// Run one validation pass: fan out over every known field, join all
/// results, and fold them into a report.
///
/// A collaborator failure never aborts the pass; the other fields are
/// still validated and the failing field is handled per `policy`.
pub async fn validate_submission(
    schema: &dyn Schema,
    values: &FieldValues,
    policy: FailurePolicy,
) -> ValidationReport {
    let names: Vec<&str> = values.names().collect();
    let checks = names.iter().map(|name| schema.validate_field(name, values));
    let results = join_all(checks).await;

    let mut field_errors = FieldErrors::new();
    for (name, result) in names.iter().zip(results) {
        match result {
            Ok(Some(message)) => {
                field_errors.insert((*name).to_string(), message);
            }
            Ok(None) => {}
            Err(failure) => match policy {
                FailurePolicy::PassField => {
                    debug!(field = *name, %failure, "collaborator failure swallowed");
                }
                FailurePolicy::FailField => {
                    field_errors.insert((*name).to_string(), failure.to_string());
                }
            },
        }
    }

    ValidationReport {
        is_invalid: !field_errors.is_empty(),
        field_errors,
    }
}
