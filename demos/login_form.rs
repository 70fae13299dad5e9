//! Login Form
//!
//! This example demonstrates a schema-validated login form.
//!
//! Key concepts:
//! - Declaring the form body as a nested node tree
//! - Schema validation with per-field messages
//! - Error nodes appearing next to their fields after a rejected submit
//! - The submit callback firing only for valid submissions
//!
//! Run with: cargo run --example login_form

use formwork::{
    schema_fn, AnnotatedNode, FieldKind, FieldValues, FormDef, FormEngine, InputEvent, Node,
    SubmitEvent,
};

fn print_tree(nodes: &[AnnotatedNode], depth: usize) {
    let pad = "  ".repeat(depth);
    for node in nodes {
        match node {
            AnnotatedNode::Field(field) => {
                let flag = if field.disabled { " (disabled)" } else { "" };
                println!("{pad}<{} name={}>{flag}", field.kind.tag(), field.name);
            }
            AnnotatedNode::Error(error) => {
                println!("{pad}!! {}", error.message);
            }
            AnnotatedNode::Container(container) => {
                println!("{pad}<{}>", container.tag);
                print_tree(&container.children, depth + 1);
            }
            AnnotatedNode::Opaque(content) => println!("{pad}{content}"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Login Form Example ===\n");

    let schema = schema_fn(|field: &str, values: &FieldValues| {
        match (field, values.get(field)) {
            ("username", Some("")) => Ok(Some("username is required".to_string())),
            ("password", Some(password)) if password.len() < 8 => {
                Ok(Some("password needs at least 8 characters".to_string()))
            }
            _ => Ok(None),
        }
    });

    let engine = FormEngine::builder()
        .on_submit(|values| {
            let json = serde_json::to_string_pretty(values).unwrap();
            println!("submit callback received:\n{json}");
        })
        .on_state_change(|state| {
            println!(
                "state change: submit_count={} invalid={}",
                state.submit_count, state.is_invalid
            );
        })
        .schema(schema)
        .build()
        .unwrap();

    let body = vec![Node::container(
        "fieldset",
        vec![
            Node::text("Sign in"),
            Node::field("username", FieldKind::Input),
            Node::field("password", FieldKind::Input).attr("type", "password"),
        ],
    )];
    let def = FormDef::new("login")
        .error_display(|message, _| Node::text(format!("error: {message}")));

    println!("-- initial render --");
    let form = engine.annotate(&def, &body);
    print_tree(&form.children, 0);

    println!("\n-- submitting empty form --");
    let outcome = engine.handle_submit(&SubmitEvent::new()).await;
    println!("outcome: {}", outcome.name());

    let form = engine.annotate(&def, &body);
    print_tree(&form.children, 0);

    println!("\n-- filling the form and resubmitting --");
    let username = engine.register("username");
    username.capture(&InputEvent::new("heron"));
    let password = engine.register("password");
    password.capture(&InputEvent::new("riverbed-stones"));

    let outcome = engine.handle_submit(&SubmitEvent::new()).await;
    println!("outcome: {}", outcome.name());

    println!("\n=== Example Complete ===");
}
