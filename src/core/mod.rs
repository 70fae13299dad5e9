//! Pure core types of the form engine.
//!
//! This module contains plain data with no side effects:
//! - `FormState` snapshots and the submit-cycle enums
//! - The field value bag
//! - The declared node tree and its construction-time classifier
//! - Submit attempt history
//!
//! Everything here is `Clone + Debug + PartialEq` and serializable; the
//! imperative shell lives in [`crate::engine`].

mod history;
mod node;
mod state;
mod values;

pub use history::{SubmitHistory, SubmitRecord};
pub use node::{Attrs, ContainerNode, FieldKind, FieldNode, Node};
pub use state::{FieldErrors, FormState, SubmitOutcome, SubmitPhase};
pub use values::FieldValues;
