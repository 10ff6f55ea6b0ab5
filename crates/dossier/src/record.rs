//! Record data model: the nine recognised fields and their values.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DossierError;

/// One of the nine recognised record fields.
///
/// The declaration order is the fixed validation and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Weight,
    NationalId,
    DocumentSeries,
    Occupation,
    Age,
    CategoryA,
    CategoryB,
    Address,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 9] = [
        Field::Email,
        Field::Weight,
        Field::NationalId,
        Field::DocumentSeries,
        Field::Occupation,
        Field::Age,
        Field::CategoryA,
        Field::CategoryB,
        Field::Address,
    ];

    /// Canonical snake_case name, as used in JSON keys and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Weight => "weight",
            Field::NationalId => "national_id",
            Field::DocumentSeries => "document_series",
            Field::Occupation => "occupation",
            Field::Age => "age",
            Field::CategoryA => "category_a",
            Field::CategoryB => "category_b",
            Field::Address => "address",
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::Age
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DossierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "email" => Ok(Field::Email),
            "weight" => Ok(Field::Weight),
            "national_id" | "inn" => Ok(Field::NationalId),
            "document_series" | "passport_series" => Ok(Field::DocumentSeries),
            "occupation" => Ok(Field::Occupation),
            "age" => Ok(Field::Age),
            "category_a" | "political_views" => Ok(Field::CategoryA),
            "category_b" | "worldview" => Ok(Field::CategoryB),
            "address" => Ok(Field::Address),
            _ => Err(DossierError::UnknownField(s.to_string())),
        }
    }
}

/// A numeric field that may arrive either as a JSON number or as text.
///
/// Both the original textual shape and the numeric value are needed for
/// validation, so the value is kept exactly as it was read.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    rkyv::Archive,
    rkyv::Serialize,
    rkyv::Deserialize,
)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Textual form used by shape checks.
    ///
    /// Integral floats keep their trailing `.0`, so `70.0` never passes for
    /// the integer `70`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Integer(v) => Cow::Owned(v.to_string()),
            FieldValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                Cow::Owned(format!("{v:.1}"))
            }
            FieldValue::Float(v) => Cow::Owned(v.to_string()),
            FieldValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Finite numeric value, if there is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v).filter(|v| v.is_finite()),
            FieldValue::Text(s) => parse_finite(s),
        }
    }

    /// Integer value. Floats are truncated toward zero; text must parse as
    /// an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            FieldValue::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            FieldValue::Float(_) => None,
            FieldValue::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// One subject's record.
///
/// Records have no identity of their own; they are identified by position
/// in the collection they were loaded from. Legacy key names from older
/// data files are accepted on load, and unknown keys are ignored.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    rkyv::Archive,
    rkyv::Serialize,
    rkyv::Deserialize,
)]
pub struct Record {
    pub email: String,
    pub weight: FieldValue,
    #[serde(alias = "inn")]
    pub national_id: String,
    #[serde(alias = "passport_series")]
    pub document_series: String,
    pub occupation: String,
    pub age: FieldValue,
    #[serde(alias = "political_views")]
    pub category_a: String,
    #[serde(alias = "worldview")]
    pub category_b: String,
    pub address: String,
}

impl Record {
    /// Textual form of any field.
    pub fn text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Email => Cow::Borrowed(&self.email),
            Field::Weight => self.weight.as_text(),
            Field::NationalId => Cow::Borrowed(&self.national_id),
            Field::DocumentSeries => Cow::Borrowed(&self.document_series),
            Field::Occupation => Cow::Borrowed(&self.occupation),
            Field::Age => self.age.as_text(),
            Field::CategoryA => Cow::Borrowed(&self.category_a),
            Field::CategoryB => Cow::Borrowed(&self.category_b),
            Field::Address => Cow::Borrowed(&self.address),
        }
    }

    /// Numeric value of a field, if it holds a finite number.
    pub fn numeric(&self, field: Field) -> Option<f64> {
        match field {
            Field::Weight => self.weight.as_f64(),
            Field::Age => self.age.as_f64(),
            other => parse_finite(&self.text(other)),
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
