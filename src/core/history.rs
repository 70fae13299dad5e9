//! Submit attempt history.
//!
//! An immutable record of every submit attempt a form instance has
//! processed, in order. Recording returns a new history rather than
//! mutating in place.

use super::state::SubmitOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single submit attempt.
///
/// # Example
///
/// ```rust
/// use formwork::core::{SubmitOutcome, SubmitRecord};
/// use chrono::Utc;
///
/// let record = SubmitRecord {
///     submit_number: 1,
///     outcome: SubmitOutcome::Rejected,
///     at: Utc::now(),
/// };
/// assert_eq!(record.outcome, SubmitOutcome::Rejected);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitRecord {
    /// The value of `submit_count` after this attempt.
    pub submit_number: usize,
    /// How the attempt ended.
    pub outcome: SubmitOutcome,
    /// When the attempt finished processing.
    pub at: DateTime<Utc>,
}

/// Ordered history of submit attempts.
///
/// `record` is pure: it returns a new history with the record appended
/// and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use formwork::core::{SubmitHistory, SubmitOutcome, SubmitRecord};
/// use chrono::Utc;
///
/// let history = SubmitHistory::new();
/// let history = history.record(SubmitRecord {
///     submit_number: 1,
///     outcome: SubmitOutcome::Submitted,
///     at: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.last().unwrap().outcome, SubmitOutcome::Submitted);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitHistory {
    records: Vec<SubmitRecord>,
}

impl SubmitHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formwork::core::{SubmitHistory, SubmitOutcome, SubmitRecord};
    /// use chrono::Utc;
    ///
    /// let history = SubmitHistory::new();
    /// let grown = history.record(SubmitRecord {
    ///     submit_number: 1,
    ///     outcome: SubmitOutcome::Rejected,
    ///     at: Utc::now(),
    /// });
    ///
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// assert_eq!(grown.len(), 1);
    /// ```
    pub fn record(&self, record: SubmitRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SubmitRecord] {
        &self.records
    }

    /// The most recent record, if any attempt has been processed.
    pub fn last(&self) -> Option<&SubmitRecord> {
        self.records.last()
    }

    /// Number of recorded attempts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether no attempts have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
