//! Property-based tests for the annotator and the field registry.
//!
//! These tests use proptest to verify invariants hold across many
//! randomly generated trees and capture sequences.

use formwork::{
    AnnotatedNode, FieldKind, FormDef, FormEngine, InputEvent, Node, NodeKey, SubmitEvent,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn engine() -> FormEngine {
    FormEngine::builder()
        .on_submit(|_| {})
        .build()
        .expect("engine should build")
}

fn arbitrary_tree() -> impl Strategy<Value = Vec<Node>> {
    let leaf = prop_oneof![
        ("[a-z]{1,8}", prop_oneof![
            Just(FieldKind::Input),
            Just(FieldKind::Select),
            Just(FieldKind::TextArea),
        ])
            .prop_map(|(name, kind)| Node::field(name, kind)),
        "[a-z ]{0,12}".prop_map(Node::text),
    ];
    let node = leaf.prop_recursive(3, 24, 4, |inner| {
        (prop::collection::vec(inner, 0..4), any::<bool>())
            .prop_map(|(children, disabled)| Node::container("div", children).disabled(disabled))
    });
    prop::collection::vec(node, 0..6)
}

/// Flatten a declared tree into a structural trace, nesting included.
fn declared_shape(nodes: &[Node], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Field(field) => out.push(format!("field:{}", field.name)),
            Node::Container(container) => {
                out.push(format!("open:{}", container.tag));
                declared_shape(&container.children, out);
                out.push("close".to_string());
            }
            Node::Opaque(content) => out.push(format!("opaque:{content}")),
        }
    }
}

/// Flatten an annotated tree the same way, skipping synthesized errors.
fn annotated_shape(nodes: &[AnnotatedNode], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            AnnotatedNode::Field(field) => out.push(format!("field:{}", field.name)),
            AnnotatedNode::Container(container) => {
                out.push(format!("open:{}", container.tag));
                annotated_shape(&container.children, out);
                out.push("close".to_string());
            }
            AnnotatedNode::Opaque(content) => out.push(format!("opaque:{content}")),
            AnnotatedNode::Error(_) => {}
        }
    }
}

fn all_fields_disabled(nodes: &[AnnotatedNode]) -> bool {
    nodes.iter().all(|node| match node {
        AnnotatedNode::Field(field) => field.disabled,
        AnnotatedNode::Container(container) => all_fields_disabled(&container.children),
        _ => true,
    })
}

fn collect_keys(nodes: &[AnnotatedNode], out: &mut Vec<NodeKey>) {
    for node in nodes {
        match node {
            AnnotatedNode::Field(field) => out.push(field.key.clone()),
            AnnotatedNode::Error(error) => out.push(error.key.clone()),
            AnnotatedNode::Container(container) => {
                out.push(container.key.clone());
                collect_keys(&container.children, out);
            }
            AnnotatedNode::Opaque(_) => {}
        }
    }
}

fn count_errors(nodes: &[AnnotatedNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            AnnotatedNode::Error(_) => 1,
            AnnotatedNode::Container(container) => count_errors(&container.children),
            _ => 0,
        })
        .sum()
}

proptest! {
    #[test]
    fn annotation_preserves_shape_and_order(tree in arbitrary_tree()) {
        let form = engine().annotate(&FormDef::new("prop"), &tree);

        let mut declared = Vec::new();
        declared_shape(&tree, &mut declared);
        let mut annotated = Vec::new();
        annotated_shape(&form.children, &mut annotated);

        prop_assert_eq!(declared, annotated);
    }

    #[test]
    fn no_messages_means_no_error_nodes(tree in arbitrary_tree()) {
        let def = FormDef::new("prop")
            .error_display(|message, _| Node::text(message.to_string()));
        let form = engine().annotate(&def, &tree);

        prop_assert_eq!(count_errors(&form.children), 0);
    }

    #[test]
    fn form_disabled_flag_reaches_every_field(tree in arbitrary_tree()) {
        let form = engine().annotate(&FormDef::new("prop").disabled(true), &tree);

        prop_assert!(all_fields_disabled(&form.children));
    }

    #[test]
    fn reannotation_yields_identical_keys(tree in arbitrary_tree()) {
        let engine = engine();
        let def = FormDef::new("prop");

        let first = engine.annotate(&def, &tree);
        let second = engine.annotate(&def, &tree);

        let mut first_keys = Vec::new();
        collect_keys(&first.children, &mut first_keys);
        let mut second_keys = Vec::new();
        collect_keys(&second.children, &mut second_keys);

        prop_assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn declared_tree_is_never_mutated(tree in arbitrary_tree()) {
        let before = tree.clone();
        engine().annotate(&FormDef::new("prop"), &tree);

        prop_assert_eq!(before, tree);
    }

    #[test]
    fn last_capture_wins(
        events in prop::collection::vec(("[abc]", "[a-z]{0,6}"), 1..20)
    ) {
        let engine = engine();
        let mut expected: BTreeMap<String, String> = BTreeMap::new();

        for (name, value) in &events {
            engine.register(name).capture(&InputEvent::new(value.clone()));
            expected.insert(name.clone(), value.clone());
        }

        let values = engine.values();
        prop_assert_eq!(values.len(), expected.len());
        for (name, value) in &expected {
            prop_assert_eq!(values.get(name), Some(value.as_str()));
        }
    }

    #[test]
    fn rejecting_schema_pairs_every_field_with_an_error(tree in arbitrary_tree()) {
        let engine = FormEngine::builder()
            .on_submit(|_| {})
            .schema(formwork::schema_fn(|field: &str, _: &formwork::FieldValues| {
                Ok(Some(format!("{field} rejected")))
            }))
            .build()
            .unwrap();
        let def = FormDef::new("prop")
            .error_display(|message, _| Node::text(message.to_string()));

        // Register every declared field, then fail them all.
        engine.annotate(&def, &tree);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime should build");
        runtime.block_on(engine.handle_submit(&SubmitEvent::new()));

        let form = engine.annotate(&def, &tree);

        fn fields_followed_by_errors(nodes: &[AnnotatedNode]) -> bool {
            let mut expecting_error_for: Option<String> = None;
            for node in nodes {
                match node {
                    AnnotatedNode::Error(error) => {
                        if expecting_error_for.as_deref() != Some(error.name.as_str()) {
                            return false;
                        }
                        expecting_error_for = None;
                    }
                    other => {
                        if expecting_error_for.is_some() {
                            return false;
                        }
                        match other {
                            AnnotatedNode::Field(field) => {
                                expecting_error_for = Some(field.name.clone());
                            }
                            AnnotatedNode::Container(container) => {
                                if !fields_followed_by_errors(&container.children) {
                                    return false;
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
            expecting_error_for.is_none()
        }

        prop_assert!(fields_followed_by_errors(&form.children));
    }
}
