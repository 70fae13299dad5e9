//! Formwork: a form-state engine with declarative tree annotation.
//!
//! A caller declares a form body as an arbitrarily nested tree of nodes
//! and never wires individual inputs by hand. Formwork walks the tree,
//! finds the nodes that are form fields, and hands back a new tree in
//! which every field captures its value into the form instance, inherits
//! disablement from its ancestors, and is followed by an error node
//! whenever the latest validation pass left a message for it.
//!
//! The crate follows a "pure core, imperative shell" split: everything
//! under [`core`] is plain data, while [`engine`] owns the one shared
//! form instance and drives the submit cycle
//! `Idle -> Validating -> {Valid, Invalid} -> Idle`.
//!
//! # Core Concepts
//!
//! - **Form engine**: one form instance; field registry plus submit
//!   state machine. Built once with [`FormEngine::builder`].
//! - **Declared tree**: [`Node`] values built fresh each render pass;
//!   never mutated, only rebuilt into an annotated tree.
//! - **Schema**: the external validation collaborator, asked one field
//!   at a time, concurrently, at submit.
//!
//! # Example
//!
//! ```rust
//! use formwork::{FieldKind, FormDef, FormEngine, InputEvent, Node};
//!
//! let engine = FormEngine::builder()
//!     .on_submit(|values| println!("submitted: {} fields", values.len()))
//!     .build()
//!     .unwrap();
//!
//! // Capture flows through handlers, not through the tree.
//! let email = engine.register("email");
//! email.capture(&InputEvent::new("otter@example.com"));
//! assert!(engine.form_state().is_dirty);
//!
//! // Fields are discovered anywhere in the declared tree.
//! let body = vec![Node::container(
//!     "fieldset",
//!     vec![
//!         Node::text("Contact"),
//!         Node::field("email", FieldKind::Input),
//!     ],
//! )];
//! let form = engine.annotate(&FormDef::new("signup"), &body);
//! assert_eq!(form.children.len(), 1);
//! ```

pub mod annotate;
pub mod builder;
pub mod core;
pub mod engine;
pub mod validate;

// Re-export commonly used types
pub use annotate::{
    AnnotatedField, AnnotatedForm, AnnotatedNode, AutoComplete, ErrorNode, FormDef, FormId, NodeKey,
};
pub use builder::{BuildError, FormEngineBuilder};
pub use core::{
    FieldErrors, FieldKind, FieldValues, FormState, Node, SubmitHistory, SubmitOutcome,
    SubmitPhase, SubmitRecord,
};
pub use engine::{CaptureHandler, FormEngine, InputEvent, SubmitEvent};
pub use validate::{schema_fn, FailurePolicy, Schema, SchemaError};
