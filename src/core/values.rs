//! The field value bag.
//!
//! Raw values for every known field, keyed by field name. Keys are unique
//! within one form instance and are never removed for the instance's
//! lifetime; an unmounted field keeps its last captured value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to raw value mapping.
///
/// Backed by an ordered map so iteration order, and with it the order of
/// the validation fan-out, is deterministic. Snapshots handed out by the
/// engine are clones; mutating a snapshot does not reach back into the
/// form.
///
/// # Example
///
/// ```rust
/// use formwork::core::FieldValues;
///
/// let mut values = FieldValues::new();
/// values.ensure("email");
/// assert_eq!(values.get("email"), Some(""));
///
/// values.set("email", "otter@example.com");
/// assert_eq!(values.get("email"), Some("otter@example.com"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValues {
    entries: BTreeMap<String, String>,
}

impl FieldValues {
    /// Create an empty value bag.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Make a field known, initializing its value to the empty string.
    ///
    /// Idempotent: a field that already holds a value keeps it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formwork::core::FieldValues;
    ///
    /// let mut values = FieldValues::new();
    /// values.set("name", "meow");
    /// values.ensure("name");
    ///
    /// assert_eq!(values.get("name"), Some("meow"));
    /// ```
    pub fn ensure(&mut self, name: &str) {
        if !self.entries.contains_key(name) {
            self.entries.insert(name.to_string(), String::new());
        }
    }

    /// Store a value under a field name, overwriting any prior value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(name.to_string(), value.into());
    }

    /// Get the current value of a field, if the field is known.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Check whether a field is known.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over known field names, in a stable order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of known fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no fields are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
