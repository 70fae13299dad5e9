//! Stable identity for annotated nodes.
//!
//! Keys are derived deterministically from the form instance id plus the
//! field name (or the child's index at its level), so re-annotating the
//! same tree across render passes yields the same keys and the host can
//! reuse node identity instead of discarding and recreating nodes.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of one form instance, woven into every derived key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(String);

impl FormId {
    /// Create an id from a caller-chosen name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a random id for callers that don't name their form.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FormId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Stable key of one annotated node.
///
/// # Example
///
/// ```rust
/// use formwork::annotate::{FormId, NodeKey};
///
/// let form = FormId::new("signup");
/// assert_eq!(NodeKey::field(&form, "email").as_str(), "input-signup-email");
/// assert_eq!(NodeKey::error(&form, "email").as_str(), "error-signup-email");
/// assert_eq!(NodeKey::child(&form, 2).as_str(), "child-signup-2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey(String);

impl NodeKey {
    /// Key of an annotated field node.
    pub fn field(form: &FormId, name: &str) -> Self {
        Self(format!("input-{form}-{name}"))
    }

    /// Key of the error node adjacent to a field.
    pub fn error(form: &FormId, name: &str) -> Self {
        Self(format!("error-{form}-{name}"))
    }

    /// Key of a container, from its index at its level.
    pub fn child(form: &FormId, index: usize) -> Self {
        Self(format!("child-{form}-{index}"))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
