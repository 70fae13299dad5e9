//! The imperative shell around the pure core.
//!
//! This module owns the shared form-instance state and implements the two
//! entry points that mutate it:
//! - capture handlers, which store field values and flip the dirty flag
//! - `handle_submit`, which drives one `Idle -> Validating -> terminal`
//!   traversal of the submit cycle
//!
//! The shared state lives behind one lock. The lock is never held across
//! an await; the validation fan-out works on a copy-on-read snapshot of
//! the value bag.

mod machine;
mod registry;

pub use machine::{FormEngine, StateChangeCallback, SubmitCallback, SubmitEvent};
pub use registry::{CaptureHandler, InputEvent};
