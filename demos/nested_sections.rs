//! Nested Sections
//!
//! This example demonstrates field discovery deep inside a nested tree
//! and disablement propagating from containers down to fields.
//!
//! Key concepts:
//! - Fields are found at any depth, siblings pass through untouched
//! - A disabled container forces every descendant field disabled
//! - A field's own flag disables it even inside an enabled container
//! - Construction-time classification: a named div is not a field
//!
//! Run with: cargo run --example nested_sections

use formwork::{AnnotatedNode, FieldKind, FormDef, FormEngine, Node};

fn describe_fields(nodes: &[AnnotatedNode], out: &mut Vec<(String, bool)>) {
    for node in nodes {
        match node {
            AnnotatedNode::Field(field) => out.push((field.name.clone(), field.disabled)),
            AnnotatedNode::Container(container) => describe_fields(&container.children, out),
            _ => {}
        }
    }
}

fn main() {
    println!("=== Nested Sections Example ===\n");

    let engine = FormEngine::builder()
        .on_submit(|_| {})
        .build()
        .unwrap();

    let body = vec![
        Node::container(
            "section",
            vec![Node::container(
                "div",
                vec![Node::container(
                    "fieldset",
                    vec![
                        Node::text("deeply nested"),
                        Node::field("buried", FieldKind::TextArea),
                    ],
                )],
            )],
        ),
        // Everything in this section is read-only.
        Node::container(
            "section",
            vec![
                Node::field("locked_one", FieldKind::Input),
                Node::field("locked_two", FieldKind::Input).disabled(false),
            ],
        )
        .disabled(true),
        Node::field("self_locked", FieldKind::Input).disabled(true),
        // Named, but not a recognized input kind: stays a container.
        Node::element("div", Some("not_a_field"), vec![]),
    ];

    let form = engine.annotate(&FormDef::new("profile"), &body);

    let mut fields = Vec::new();
    describe_fields(&form.children, &mut fields);
    for (name, disabled) in &fields {
        let flag = if *disabled { "disabled" } else { "enabled" };
        println!("field {name}: {flag}");
    }

    println!("\nregistered fields: {:?}", engine.values().names().collect::<Vec<_>>());
    println!("note: not_a_field was not registered");

    println!("\n=== Example Complete ===");
}
