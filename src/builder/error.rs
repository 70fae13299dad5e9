//! Build errors for form engine construction.

use thiserror::Error;

/// Errors that can occur when building a form engine.
///
/// Configuration problems fail fast here so they can never surface in
/// the middle of a submit attempt.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Submit callback not specified. Call .on_submit(callback) before .build()")]
    MissingSubmitCallback,
}
