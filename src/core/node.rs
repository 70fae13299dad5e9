//! The declared node tree.
//!
//! A form body is an arbitrarily nested tree of three node kinds: fields,
//! containers, and opaque content. The variant is decided when the tree
//! is constructed, not sniffed at annotation time, so the annotator works
//! over explicit data.
//!
//! Trees are declared fresh on every render pass and are never mutated by
//! the annotator; annotation builds a new tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Non-form attributes carried verbatim on a node (class, style, ...).
pub type Attrs = BTreeMap<String, String>;

/// Kinds of input element recognized as form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// A plain `input` element.
    Input,
    /// A `select` element; its options ride along as the field's payload.
    Select,
    /// A `textarea` element.
    TextArea,
}

impl FieldKind {
    /// Map an element tag to a recognized field kind.
    ///
    /// Tags outside the recognized set yield `None`; such elements are
    /// containers even when they carry a name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formwork::core::FieldKind;
    ///
    /// assert_eq!(FieldKind::recognize("input"), Some(FieldKind::Input));
    /// assert_eq!(FieldKind::recognize("select"), Some(FieldKind::Select));
    /// assert_eq!(FieldKind::recognize("div"), None);
    /// ```
    pub fn recognize(tag: &str) -> Option<Self> {
        match tag {
            "input" => Some(Self::Input),
            "select" => Some(Self::Select),
            "textarea" => Some(Self::TextArea),
            _ => None,
        }
    }

    /// The element tag this kind renders as.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Select => "select",
            Self::TextArea => "textarea",
        }
    }
}

/// A leaf node representing one user-editable input.
///
/// The `name` is the field's identifier within the form instance and the
/// key its captured value is stored under. `children` is presentation
/// payload (a select's options) that the annotator carries through
/// without descending into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldNode {
    /// Field identifier, unique within the form instance.
    pub name: String,
    /// Which recognized input element this field is.
    pub kind: FieldKind,
    /// Local disabled flag; ORed with every ancestor's flag.
    pub disabled: bool,
    /// Non-form attributes passed through to the annotated node.
    pub attrs: Attrs,
    /// Presentation payload carried through unannotated.
    pub children: Vec<Node>,
}

/// An element with ordered children the annotator descends into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerNode {
    /// Element tag.
    pub tag: String,
    /// Local disabled flag, propagated to every descendant.
    pub disabled: bool,
    /// Non-form attributes passed through to the annotated node.
    pub attrs: Attrs,
    /// Ordered child nodes.
    pub children: Vec<Node>,
}

/// One node of a declared form body.
///
/// # Example
///
/// ```rust
/// use formwork::core::{FieldKind, Node};
///
/// let tree = Node::container(
///     "fieldset",
///     vec![
///         Node::text("Contact"),
///         Node::field("email", FieldKind::Input),
///     ],
/// );
///
/// assert!(matches!(tree, Node::Container(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A form field leaf.
    Field(FieldNode),
    /// An element to recurse into.
    Container(ContainerNode),
    /// Content the annotator does not recognize, passed through unchanged.
    Opaque(String),
}

impl Node {
    /// Declare a field leaf.
    pub fn field(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::Field(FieldNode {
            name: name.into(),
            kind,
            disabled: false,
            attrs: Attrs::new(),
            children: Vec::new(),
        })
    }

    /// Declare a container element with ordered children.
    pub fn container(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Container(ContainerNode {
            tag: tag.into(),
            disabled: false,
            attrs: Attrs::new(),
            children,
        })
    }

    /// Declare opaque content.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Opaque(content.into())
    }

    /// Classify an element into a node variant at construction time.
    ///
    /// An element becomes a field only when it carries a name AND its tag
    /// is in the recognized input-kind set. A named element with an
    /// unrecognized tag becomes an ordinary container; the name is kept
    /// as a plain attribute and is ignored for registration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formwork::core::{FieldKind, Node};
    ///
    /// let field = Node::element("input", Some("email"), vec![]);
    /// assert!(matches!(field, Node::Field(_)));
    ///
    /// // Recognized tag without a name: just a container.
    /// let anonymous = Node::element("input", None, vec![]);
    /// assert!(matches!(anonymous, Node::Container(_)));
    ///
    /// // Named but unrecognized tag: container, name demoted to an attribute.
    /// let named_div = Node::element("div", Some("layout"), vec![]);
    /// assert!(matches!(named_div, Node::Container(_)));
    /// ```
    pub fn element(tag: &str, name: Option<&str>, children: Vec<Node>) -> Self {
        if let Some(name) = name {
            if let Some(kind) = FieldKind::recognize(tag) {
                return Self::Field(FieldNode {
                    name: name.to_string(),
                    kind,
                    disabled: false,
                    attrs: Attrs::new(),
                    children,
                });
            }
        }
        let mut attrs = Attrs::new();
        if let Some(name) = name {
            attrs.insert("name".to_string(), name.to_string());
        }
        Self::Container(ContainerNode {
            tag: tag.to_string(),
            disabled: false,
            attrs,
            children,
        })
    }

    /// Set the local disabled flag. No effect on opaque content.
    pub fn disabled(mut self, disabled: bool) -> Self {
        match &mut self {
            Self::Field(field) => field.disabled = disabled,
            Self::Container(container) => container.disabled = disabled,
            Self::Opaque(_) => {}
        }
        self
    }

    /// Attach a non-form attribute. No effect on opaque content.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Field(field) => {
                field.attrs.insert(key.into(), value.into());
            }
            Self::Container(container) => {
                container.attrs.insert(key.into(), value.into());
            }
            Self::Opaque(_) => {}
        }
        self
    }

    /// View this node as a field, if it is one.
    pub fn as_field(&self) -> Option<&FieldNode> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognize_covers_input_kinds() {
        assert_eq!(FieldKind::recognize("input"), Some(FieldKind::Input));
        assert_eq!(FieldKind::recognize("select"), Some(FieldKind::Select));
        assert_eq!(FieldKind::recognize("textarea"), Some(FieldKind::TextArea));
        assert_eq!(FieldKind::recognize("div"), None);
        assert_eq!(FieldKind::recognize("button"), None);
    }

    #[test]
    fn kind_tag_round_trips_through_recognize() {
        for kind in [FieldKind::Input, FieldKind::Select, FieldKind::TextArea] {
            assert_eq!(FieldKind::recognize(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn element_with_name_and_recognized_tag_is_field() {
        let node = Node::element("select", Some("animal"), vec![Node::text("otter")]);

        let field = node.as_field().expect("should classify as field");
        assert_eq!(field.name, "animal");
        assert_eq!(field.kind, FieldKind::Select);
        assert_eq!(field.children.len(), 1);
    }

    #[test]
    fn named_unrecognized_tag_becomes_container_with_name_attr() {
        let node = Node::element("div", Some("layout"), vec![]);

        match node {
            Node::Container(container) => {
                assert_eq!(container.tag, "div");
                assert_eq!(container.attrs.get("name").map(String::as_str), Some("layout"));
            }
            other => panic!("expected container, got {other:?}"),
        }
    }

    #[test]
    fn anonymous_recognized_tag_becomes_container() {
        let node = Node::element("input", None, vec![]);
        assert!(matches!(node, Node::Container(_)));
    }

    #[test]
    fn disabled_and_attr_apply_to_fields_and_containers() {
        let field = Node::field("one", FieldKind::Input)
            .disabled(true)
            .attr("type", "password");
        match field {
            Node::Field(f) => {
                assert!(f.disabled);
                assert_eq!(f.attrs.get("type").map(String::as_str), Some("password"));
            }
            other => panic!("expected field, got {other:?}"),
        }

        let container = Node::container("section", vec![]).disabled(true);
        match container {
            Node::Container(c) => assert!(c.disabled),
            other => panic!("expected container, got {other:?}"),
        }
    }

    #[test]
    fn opaque_ignores_builder_helpers() {
        let node = Node::text("hello").disabled(true).attr("class", "x");
        assert_eq!(node, Node::Opaque("hello".to_string()));
    }

    #[test]
    fn tree_serializes_correctly() {
        let tree = Node::container(
            "fieldset",
            vec![
                Node::field("email", FieldKind::Input).attr("type", "email"),
                Node::text("helper text"),
            ],
        );

        let json = serde_json::to_string(&tree).unwrap();
        let deserialized: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, deserialized);
    }
}
