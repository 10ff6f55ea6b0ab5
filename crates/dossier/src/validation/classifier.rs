//! Record classifier: runs every field validator against one record.

use crate::record::{Field, Record};

use super::validators::{self, NationalIdMatch};

/// A validator applied to the relevant field of a record.
pub type FieldCheck = fn(&Record) -> bool;

/// Dispatch table in fixed validation order.
pub const FIELD_VALIDATORS: [(Field, FieldCheck); 9] = [
    (Field::Email, email),
    (Field::Weight, weight),
    (Field::NationalId, national_id),
    (Field::DocumentSeries, document_series),
    (Field::Occupation, occupation),
    (Field::Age, age),
    (Field::CategoryA, category_a),
    (Field::CategoryB, category_b),
    (Field::Address, address),
];

fn email(r: &Record) -> bool {
    validators::is_valid_email(&r.email)
}

fn weight(r: &Record) -> bool {
    validators::is_valid_weight(&r.weight)
}

fn national_id(r: &Record) -> bool {
    validators::is_valid_national_id(&r.national_id)
}

fn national_id_exact(r: &Record) -> bool {
    validators::is_valid_national_id_exact(&r.national_id)
}

fn document_series(r: &Record) -> bool {
    validators::is_valid_document_series(&r.document_series)
}

fn occupation(r: &Record) -> bool {
    validators::is_valid_occupation(&r.occupation)
}

fn age(r: &Record) -> bool {
    validators::is_valid_age(&r.age)
}

fn category_a(r: &Record) -> bool {
    validators::is_valid_category_a(&r.category_a)
}

fn category_b(r: &Record) -> bool {
    validators::is_valid_category_b(&r.category_b)
}

fn address(r: &Record) -> bool {
    validators::is_valid_address(&r.address)
}

/// Applies all field validators to a record.
///
/// Each classifier owns its dispatch table, starting from
/// [`FIELD_VALIDATORS`] with the national id entry set by its
/// [`NationalIdMatch`].
#[derive(Debug, Clone)]
pub struct RecordClassifier {
    checks: [(Field, FieldCheck); 9],
}

impl Default for RecordClassifier {
    fn default() -> Self {
        Self {
            checks: FIELD_VALIDATORS,
        }
    }
}

impl RecordClassifier {
    /// Create a classifier with the default (permissive) national id rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how strictly national ids are checked.
    pub fn with_national_id_match(mut self, mode: NationalIdMatch) -> Self {
        let check: FieldCheck = match mode {
            NationalIdMatch::Search => national_id,
            NationalIdMatch::Exact => national_id_exact,
        };
        for (field, entry) in self.checks.iter_mut() {
            if *field == Field::NationalId {
                *entry = check;
            }
        }
        self
    }

    /// The dispatch table, in validation order.
    pub fn checks(&self) -> &[(Field, FieldCheck)] {
        &self.checks
    }

    /// Fields that failed validation, in validation order.
    ///
    /// Every validator runs, so a record with several bad fields reports all
    /// of them. An empty result means the record is valid.
    pub fn classify(&self, record: &Record) -> Vec<Field> {
        self.checks
            .iter()
            .filter(|(_, check)| !check(record))
            .map(|(field, _)| *field)
            .collect()
    }

    /// Returns true if every field of the record is valid.
    pub fn is_valid(&self, record: &Record) -> bool {
        self.classify(record).is_empty()
    }
}
