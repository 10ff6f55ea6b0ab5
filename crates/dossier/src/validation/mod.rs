//! Validation engine: field validators, record classifier and partitioner.

pub mod catalogs;
mod classifier;
mod partition;
pub mod validators;

pub use classifier::{FIELD_VALIDATORS, FieldCheck, RecordClassifier};
pub use partition::{Partition, PartitionSummary, Partitioner, Progress, Tally};
pub use validators::NationalIdMatch;
