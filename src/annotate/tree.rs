//! The recursive tree annotator.
//!
//! Annotation walks a declared node list depth-first, in order, and
//! builds a new tree: field leaves come back wired with a capture handler,
//! an effective disabled flag, and a stable key; containers come back
//! wrapping their annotated children; opaque content passes through
//! untouched. When an error display is configured and the current state
//! holds a message for a field, an error node is placed immediately after
//! that field. Nothing else is reordered, added, or removed.

use super::key::{FormId, NodeKey};
use crate::core::{Attrs, FieldKind, FormState, Node};
use crate::engine::{CaptureHandler, FormEngine};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Renders a field's error message into a displayable node.
///
/// Invoked as `(message, field_name)`.
pub type ErrorDisplay = Arc<dyn Fn(&str, &str) -> Node + Send + Sync>;

/// `autocomplete` passthrough for the rendered form element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoComplete {
    #[default]
    On,
    Off,
}

impl AutoComplete {
    /// The attribute value the host should render.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

/// Form-level annotation options.
///
/// The id participates in every derived node key; the disabled flag
/// propagates to every descendant field; non-form attributes are carried
/// onto the rendered form element verbatim.
#[derive(Clone)]
pub struct FormDef {
    /// Form instance identifier.
    pub id: FormId,
    /// Disables every field in the form when set.
    pub disabled: bool,
    /// `autocomplete` passthrough.
    pub auto_complete: AutoComplete,
    /// Non-form attributes for the form element (class, style, ...).
    pub attrs: Attrs,
    /// Error display; without one, no error nodes are synthesized.
    pub error_display: Option<ErrorDisplay>,
}

impl FormDef {
    /// Options for a named form, everything else at defaults.
    pub fn new(id: impl Into<FormId>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            auto_complete: AutoComplete::default(),
            attrs: Attrs::new(),
            error_display: None,
        }
    }

    /// Options for an anonymous form with a generated id.
    pub fn generated() -> Self {
        Self::new(FormId::generate())
    }

    /// Set the form-level disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the `autocomplete` passthrough.
    pub fn auto_complete(mut self, auto_complete: AutoComplete) -> Self {
        self.auto_complete = auto_complete;
        self
    }

    /// Attach a non-form attribute to the form element.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Configure the error display invoked as `(message, field_name)`.
    pub fn error_display<F>(mut self, display: F) -> Self
    where
        F: Fn(&str, &str) -> Node + Send + Sync + 'static,
    {
        self.error_display = Some(Arc::new(display));
        self
    }
}

impl fmt::Debug for FormDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDef")
            .field("id", &self.id)
            .field("disabled", &self.disabled)
            .field("auto_complete", &self.auto_complete)
            .field("attrs", &self.attrs)
            .field("error_display", &self.error_display.is_some())
            .finish()
    }
}

/// A field leaf wired for capture.
#[derive(Clone, Debug)]
pub struct AnnotatedField {
    /// Stable identity derived from the form id and field name.
    pub key: NodeKey,
    /// Field identifier.
    pub name: String,
    /// Which input element this field is.
    pub kind: FieldKind,
    /// Effective flag: local OR every ancestor, OR the form level.
    pub disabled: bool,
    /// Non-form attributes carried from the declared node.
    pub attrs: Attrs,
    /// Presentation payload carried through unannotated.
    pub children: Vec<Node>,
    /// Capture callback bound to this field's storage.
    pub on_change: CaptureHandler,
}

/// An error node synthesized next to a failing field.
#[derive(Clone, Debug)]
pub struct ErrorNode {
    /// Stable identity derived from the form id and field name.
    pub key: NodeKey,
    /// The field this error belongs to.
    pub name: String,
    /// The message from the latest validation pass.
    pub message: String,
    /// What the configured error display rendered.
    pub body: Node,
}

/// A container wrapping annotated children.
#[derive(Clone, Debug)]
pub struct AnnotatedContainer {
    /// Stable identity derived from the form id and the index at this
    /// container's level.
    pub key: NodeKey,
    /// Element tag carried from the declared node.
    pub tag: String,
    /// Effective flag: local OR every ancestor, OR the form level.
    pub disabled: bool,
    /// Non-form attributes carried from the declared node.
    pub attrs: Attrs,
    /// Annotated children, in declaration order.
    pub children: Vec<AnnotatedNode>,
}

/// One node of an annotated tree.
#[derive(Clone, Debug)]
pub enum AnnotatedNode {
    /// A wired field leaf.
    Field(AnnotatedField),
    /// An error node adjacent to its field.
    Error(ErrorNode),
    /// A container with annotated children.
    Container(AnnotatedContainer),
    /// Opaque content, untouched.
    Opaque(String),
}

impl AnnotatedNode {
    /// View this node as a wired field, if it is one.
    pub fn as_field(&self) -> Option<&AnnotatedField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    /// View this node as a container, if it is one.
    pub fn as_container(&self) -> Option<&AnnotatedContainer> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Check whether this is a synthesized error node.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// The annotated form handed to the host renderer.
#[derive(Clone, Debug)]
pub struct AnnotatedForm {
    /// Form instance identifier.
    pub id: FormId,
    /// `autocomplete` passthrough.
    pub auto_complete: AutoComplete,
    /// Non-form attributes for the form element.
    pub attrs: Attrs,
    /// Annotated body, same ordering as declared.
    pub children: Vec<AnnotatedNode>,
}

impl FormEngine {
    /// Annotate a declared tree against this form instance.
    ///
    /// Reads one state snapshot for the whole pass, registers every
    /// discovered field, and builds a new tree; the declared tree is
    /// never touched. Output ordering matches the input node-for-node,
    /// with error nodes interleaved immediately after their fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formwork::{FieldKind, FormDef, FormEngine, Node};
    ///
    /// let engine = FormEngine::builder()
    ///     .on_submit(|_| {})
    ///     .build()
    ///     .unwrap();
    ///
    /// let tree = vec![Node::container(
    ///     "fieldset",
    ///     vec![Node::field("email", FieldKind::Input)],
    /// )];
    /// let form = engine.annotate(&FormDef::new("signup"), &tree);
    ///
    /// let fieldset = form.children[0].as_container().unwrap();
    /// let email = fieldset.children[0].as_field().unwrap();
    /// assert_eq!(email.key.as_str(), "input-signup-email");
    /// ```
    pub fn annotate(&self, def: &FormDef, children: &[Node]) -> AnnotatedForm {
        let state = self.form_state();
        let mut annotated = Vec::with_capacity(children.len());
        annotate_level(self, &state, def, children, def.disabled, &mut annotated);
        AnnotatedForm {
            id: def.id.clone(),
            auto_complete: def.auto_complete,
            attrs: def.attrs.clone(),
            children: annotated,
        }
    }
}

fn annotate_level(
    engine: &FormEngine,
    state: &FormState,
    def: &FormDef,
    nodes: &[Node],
    inherited_disabled: bool,
    out: &mut Vec<AnnotatedNode>,
) {
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::Opaque(content) => {
                out.push(AnnotatedNode::Opaque(content.clone()));
            }
            Node::Field(field) => {
                let disabled = field.disabled || inherited_disabled;
                let on_change = engine.register(&field.name);
                trace!(field = %field.name, disabled, "field discovered");

                out.push(AnnotatedNode::Field(AnnotatedField {
                    key: NodeKey::field(&def.id, &field.name),
                    name: field.name.clone(),
                    kind: field.kind,
                    disabled,
                    attrs: field.attrs.clone(),
                    children: field.children.clone(),
                    on_change,
                }));

                // Error nodes are omitted entirely when the field has no
                // message; their keys derive from the name, so siblings
                // keep stable keys either way.
                if let Some(display) = &def.error_display {
                    if let Some(message) = state.error(&field.name) {
                        out.push(AnnotatedNode::Error(ErrorNode {
                            key: NodeKey::error(&def.id, &field.name),
                            name: field.name.clone(),
                            message: message.to_string(),
                            body: display(message, &field.name),
                        }));
                    }
                }
            }
            Node::Container(container) => {
                let disabled = container.disabled || inherited_disabled;
                let mut inner = Vec::with_capacity(container.children.len());
                annotate_level(engine, state, def, &container.children, disabled, &mut inner);

                out.push(AnnotatedNode::Container(AnnotatedContainer {
                    key: NodeKey::child(&def.id, index),
                    tag: container.tag.clone(),
                    disabled,
                    attrs: container.attrs.clone(),
                    children: inner,
                }));
            }
        }
    }
}
