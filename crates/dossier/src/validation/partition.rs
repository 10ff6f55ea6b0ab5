//! Dataset partitioner: splits a collection into valid and invalid records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::{Field, Record};

use super::classifier::RecordClassifier;

/// Per-field failure counts across a dataset.
///
/// Always holds all nine fields, in validation order, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally(IndexMap<Field, usize>);

impl Tally {
    pub fn new() -> Self {
        Self(Field::ALL.iter().map(|field| (*field, 0)).collect())
    }

    /// Count one failure of a field.
    pub fn record(&mut self, field: Field) {
        *self.0.entry(field).or_insert(0) += 1;
    }

    /// Failures counted for a field.
    pub fn get(&self, field: Field) -> usize {
        self.0.get(&field).copied().unwrap_or(0)
    }

    /// Iterate over `(field, count)` in validation order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.0.iter().map(|(field, count)| (*field, *count))
    }

    /// Total number of field failures.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of partitioning a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partition {
    /// Records that passed every field validator, in input order.
    pub valid: Vec<Record>,
    /// Records with at least one failed field, in input order.
    pub invalid: Vec<Record>,
    /// Failure counts by field.
    pub tally: Tally,
}

impl Partition {
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    /// Number of records that were classified.
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Summary counts without the records themselves.
    pub fn summary(&self) -> PartitionSummary {
        PartitionSummary {
            valid: self.valid_count(),
            invalid: self.invalid_count(),
            errors_by_field: self.tally.clone(),
        }
    }
}

/// Counts reported after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSummary {
    pub valid: usize,
    pub invalid: usize,
    pub errors_by_field: Tally,
}

/// Progress of a running partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Records classified so far.
    pub processed: usize,
    /// Records in the dataset.
    pub total: usize,
}

/// Classifies every record of a dataset.
#[derive(Debug, Clone, Default)]
pub struct Partitioner {
    classifier: RecordClassifier,
}

impl Partitioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a partitioner around a configured classifier.
    pub fn with_classifier(classifier: RecordClassifier) -> Self {
        Self { classifier }
    }

    pub fn partition(&self, records: &[Record]) -> Partition {
        self.partition_with_progress(records, |_| {})
    }

    /// Partition while reporting progress after each record.
    ///
    /// The callback only observes; it cannot change the result.
    pub fn partition_with_progress<F>(&self, records: &[Record], mut on_progress: F) -> Partition
    where
        F: FnMut(Progress),
    {
        let total = records.len();
        let mut partition = Partition::default();

        for (index, record) in records.iter().enumerate() {
            let failed = self.classifier.classify(record);

            if failed.is_empty() {
                partition.valid.push(record.clone());
            } else {
                tracing::debug!(index, fields = ?failed, "invalid record");
                for field in &failed {
                    partition.tally.record(*field);
                }
                partition.invalid.push(record.clone());
            }

            on_progress(Progress {
                processed: index + 1,
                total,
            });
        }

        tracing::info!(
            valid = partition.valid_count(),
            invalid = partition.invalid_count(),
            "partitioned {} records",
            total
        );

        partition
    }
}
