//! Main Dossier struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence;
use crate::record::{Field, Record};
use crate::sort;
use crate::validation::{NationalIdMatch, Partition, Partitioner, Progress, RecordClassifier};

/// Configuration for validation and sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DossierConfig {
    /// Numeric field used as the sort key.
    pub sort_key: Field,
    /// How strictly national ids are checked.
    pub national_id_match: NationalIdMatch,
}

impl DossierConfig {
    pub fn with_sort_key(mut self, key: Field) -> Self {
        self.sort_key = key;
        self
    }

    pub fn with_national_id_match(mut self, mode: NationalIdMatch) -> Self {
        self.national_id_match = mode;
        self
    }
}

/// Validates and sorts record collections.
pub struct Dossier {
    config: DossierConfig,
    partitioner: Partitioner,
}

impl Dossier {
    /// Create a new Dossier instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(DossierConfig::default())
    }

    /// Create a Dossier instance with custom configuration.
    pub fn with_config(config: DossierConfig) -> Self {
        let classifier =
            RecordClassifier::new().with_national_id_match(config.national_id_match);

        Self {
            config,
            partitioner: Partitioner::with_classifier(classifier),
        }
    }

    pub fn config(&self) -> &DossierConfig {
        &self.config
    }

    /// Split records into valid and invalid sets with a failure tally.
    pub fn validate(&self, records: &[Record]) -> Partition {
        self.partitioner.partition(records)
    }

    /// Like [`Dossier::validate`], reporting progress after each record.
    pub fn validate_with_progress<F>(&self, records: &[Record], on_progress: F) -> Partition
    where
        F: FnMut(Progress),
    {
        self.partitioner.partition_with_progress(records, on_progress)
    }

    /// Load a JSON record file and validate it.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<Partition> {
        let records = persistence::load(path)?;
        Ok(self.validate(&records))
    }

    /// Sort records by the configured key.
    pub fn sort(&self, records: Vec<Record>) -> Result<Vec<Record>> {
        sort::quick_sort(records, self.config.sort_key)
    }

    /// Load a JSON record file and sort it by the configured key.
    pub fn sort_file(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let records = persistence::load(path)?;
        self.sort(records)
    }
}

impl Default for Dossier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    fn record(national_id: &str, weight: i64) -> Record {
        Record {
            email: "orlov@rambler.ru".to_string(),
            weight: FieldValue::Integer(weight),
            national_id: national_id.to_string(),
            document_series: "98 76".to_string(),
            occupation: "Повар".to_string(),
            age: FieldValue::Integer(29),
            category_a: "Социалистические".to_string(),
            category_b: "Пантеизм".to_string(),
            address: "ул. Кирова 21".to_string(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = DossierConfig::default();
        assert_eq!(config.sort_key, Field::Age);
        assert_eq!(config.national_id_match, NationalIdMatch::Search);
    }

    #[test]
    fn test_strict_config_changes_outcome() {
        let records = vec![record("12345678901 доп.", 70)];

        assert_eq!(Dossier::new().validate(&records).valid_count(), 1);

        let strict = Dossier::with_config(
            DossierConfig::default().with_national_id_match(NationalIdMatch::Exact),
        );
        let partition = strict.validate(&records);
        assert_eq!(partition.invalid_count(), 1);
        assert_eq!(partition.tally.get(Field::NationalId), 1);
    }

    #[test]
    fn test_sort_uses_configured_key() {
        let dossier = Dossier::with_config(DossierConfig::default().with_sort_key(Field::Weight));
        let sorted = dossier
            .sort(vec![record("1", 90), record("2", 60), record("3", 75)])
            .unwrap();
        let ids: Vec<_> = sorted.iter().map(|r| r.national_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }
}
