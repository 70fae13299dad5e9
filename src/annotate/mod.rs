//! Tree annotation: discovering fields and wiring behavior.
//!
//! The annotator turns a declared [`crate::core::Node`] tree into an
//! annotated tree for the host renderer: same shape, same ordering, with
//! field leaves wired for capture and error nodes interleaved next to
//! failing fields. Keys are derived deterministically so the host can
//! reuse node identity across render passes.

mod key;
mod tree;

pub use key::{FormId, NodeKey};
pub use tree::{
    AnnotatedContainer, AnnotatedField, AnnotatedForm, AnnotatedNode, AutoComplete, ErrorDisplay,
    ErrorNode, FormDef,
};
