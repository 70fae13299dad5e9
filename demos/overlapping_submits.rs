//! Overlapping Submits
//!
//! This example demonstrates the pass-numbering policy for overlapping
//! validation passes: when a user resubmits while a slow validation is
//! still in flight, the older pass completes as Discarded and never
//! overwrites the newer pass's results.
//!
//! Run with: cargo run --example overlapping_submits

use async_trait::async_trait;
use formwork::{FieldValues, FormEngine, InputEvent, Schema, SchemaError, SubmitEvent};
use std::time::Duration;

/// Validates slowly while the field is empty, instantly once filled.
struct SlowRules;

#[async_trait]
impl Schema for SlowRules {
    async fn validate_field(
        &self,
        field: &str,
        values: &FieldValues,
    ) -> Result<Option<String>, SchemaError> {
        if values.get(field) == Some("") {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(Some(format!("{field} is required")))
        } else {
            Ok(None)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Overlapping Submits Example ===\n");

    let engine = FormEngine::builder()
        .on_submit(|values| println!("submit callback ran with {values:?}"))
        .schema(SlowRules)
        .build()
        .unwrap();
    let comment = engine.register("comment");

    // First submit: the field is empty, validation is slow.
    let slow = {
        let engine = engine.clone();
        tokio::spawn(async move { engine.handle_submit(&SubmitEvent::new()).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    // The user types and resubmits before the first pass finishes.
    comment.capture(&InputEvent::new("hello from the riverbank"));
    let fast = engine.handle_submit(&SubmitEvent::new()).await;
    println!("second submit outcome: {}", fast.name());

    let slow = slow.await.unwrap();
    println!("first submit outcome:  {}", slow.name());

    let state = engine.form_state();
    println!(
        "\nfinal state: submit_count={} invalid={} errors={:?}",
        state.submit_count, state.is_invalid, state.field_errors
    );

    println!("\nattempt history:");
    for record in engine.submit_history().records() {
        println!("  #{} {}", record.submit_number, record.outcome.name());
    }

    println!("\n=== Example Complete ===");
}
