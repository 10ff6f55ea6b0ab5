//! Dossier: validation, partitioning and sorting of personal-record datasets.
//!
//! Every record carries nine fields. Each field has its own validator; a
//! record is valid only when all nine pass. A dataset is split into valid and
//! invalid records with a per-field failure tally, and validated records can
//! be sorted by a numeric field and stored as JSON or as a binary blob.
//!
//! # Example
//!
//! ```no_run
//! use dossier::{Dossier, Field, persistence};
//!
//! let dossier = Dossier::new();
//! let partition = dossier.validate_file("records.json").unwrap();
//!
//! println!("Valid: {}", partition.valid_count());
//! println!("Invalid: {}", partition.invalid_count());
//! println!("Bad emails: {}", partition.tally.get(Field::Email));
//!
//! let sorted = dossier.sort(partition.valid).unwrap();
//! persistence::save_blob("sorted.bin", &sorted).unwrap();
//! ```

pub mod error;
pub mod persistence;
pub mod record;
pub mod sort;
pub mod validation;

mod dossier;

pub use crate::dossier::{Dossier, DossierConfig};
pub use error::{DossierError, Result};
pub use record::{Field, FieldValue, Record};
pub use validation::{
    NationalIdMatch, Partition, PartitionSummary, Partitioner, Progress, RecordClassifier, Tally,
};
