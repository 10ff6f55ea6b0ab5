//! Field validators.
//!
//! One pure predicate per record field. Each takes the raw field value and
//! answers whether it is acceptable; none of them depends on another.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::FieldValue;

use super::catalogs::{CATEGORY_A, CATEGORY_B, OCCUPATION_BLOCKLIST};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@([^\s@.,]+\.)+[^\s@.,]{2,}$").unwrap());

static WEIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2,3}$").unwrap());

static NATIONAL_ID_SEARCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{11}").unwrap());

static NATIONAL_ID_EXACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").unwrap());

static DOCUMENT_SERIES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}\s\d{2}$").unwrap());

// Letter words with an optional trailing period, space and hyphen.
static WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([А-яA-z]+\.?\s?-?)+$").unwrap());

static CATEGORY_A_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(([А-яA-z])+\.?\s?-?)+$").unwrap());

static AGE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,3}").unwrap());

static ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-я.]+\s[\w .()-]+\d+$").unwrap());

/// How strictly the national id is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NationalIdMatch {
    /// Eleven consecutive digits anywhere in the value; surrounding
    /// characters are not rejected.
    #[default]
    Search,
    /// The whole value must be exactly eleven digits.
    Exact,
}

/// Local part, `@`, one or more `label.` groups, top-level label of at
/// least two characters. No whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Two or three digits, strictly between 20 and 150.
pub fn is_valid_weight(value: &FieldValue) -> bool {
    WEIGHT.is_match(&value.as_text())
        && value.as_f64().is_some_and(|w| w > 20.0 && w < 150.0)
}

/// Eleven consecutive digits somewhere in the value.
pub fn is_valid_national_id(value: &str) -> bool {
    NATIONAL_ID_SEARCH.is_match(value)
}

/// Exactly eleven digits and nothing else.
pub fn is_valid_national_id_exact(value: &str) -> bool {
    NATIONAL_ID_EXACT.is_match(value)
}

/// National id check with a selectable strictness.
pub fn check_national_id(value: &str, mode: NationalIdMatch) -> bool {
    match mode {
        NationalIdMatch::Search => is_valid_national_id(value),
        NationalIdMatch::Exact => is_valid_national_id_exact(value),
    }
}

/// Two digits, one whitespace character, two digits.
pub fn is_valid_document_series(value: &str) -> bool {
    DOCUMENT_SERIES.is_match(value)
}

/// Letter words that are not on the occupation blocklist.
pub fn is_valid_occupation(value: &str) -> bool {
    WORDS.is_match(value) && !OCCUPATION_BLOCKLIST.contains(&value)
}

/// Starts with one to three digits and is an integer in `(0, 108]`.
pub fn is_valid_age(value: &FieldValue) -> bool {
    AGE_PREFIX.is_match(&value.as_text())
        && value.as_integer().is_some_and(|age| age > 0 && age <= 108)
}

pub fn is_valid_category_a(value: &str) -> bool {
    CATEGORY_A_WORDS.is_match(value) && CATEGORY_A.contains(&value)
}

pub fn is_valid_category_b(value: &str) -> bool {
    WORDS.is_match(value) && CATEGORY_B.contains(&value)
}

/// A leading word of letters and periods (`ул.`, `Аллея`), one whitespace,
/// free text, then a house number.
pub fn is_valid_address(value: &str) -> bool {
    ADDRESS.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("ivanov@mail.ru"));
        assert!(is_valid_email("a.b-c@sub.example.com"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b.cc"));
        assert!(!is_valid_email("no at sign.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user name@mail.ru"));
        assert!(!is_valid_email("user@mail,ru.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_weight() {
        assert!(is_valid_weight(&FieldValue::from("70")));
        assert!(is_valid_weight(&FieldValue::Integer(70)));
        assert!(!is_valid_weight(&FieldValue::from("15")));
        assert!(!is_valid_weight(&FieldValue::from("200")));
        assert!(!is_valid_weight(&FieldValue::Integer(20)));
        assert!(!is_valid_weight(&FieldValue::Integer(150)));
        assert!(is_valid_weight(&FieldValue::Integer(149)));
        assert!(!is_valid_weight(&FieldValue::Float(70.0)));
        assert!(!is_valid_weight(&FieldValue::from("1500")));
        assert!(!is_valid_weight(&FieldValue::from("7o")));
    }

    #[test]
    fn test_national_id_search_accepts_trailing_characters() {
        assert!(is_valid_national_id("12345678901"));
        assert!(is_valid_national_id("123456789012"));
        assert!(is_valid_national_id("12345678901abc"));
        assert!(is_valid_national_id("id 12345678901"));
        assert!(!is_valid_national_id("1234567890"));
        assert!(!is_valid_national_id("12345-678901"));
    }

    #[test]
    fn test_national_id_exact() {
        assert!(is_valid_national_id_exact("12345678901"));
        assert!(!is_valid_national_id_exact("12345678901abc"));
        assert!(!is_valid_national_id_exact("123456789012"));
        assert!(check_national_id("12345678901x", NationalIdMatch::Search));
        assert!(!check_national_id("12345678901x", NationalIdMatch::Exact));
    }

    #[test]
    fn test_document_series() {
        assert!(is_valid_document_series("12 34"));
        assert!(is_valid_document_series("12\t34"));
        assert!(!is_valid_document_series("1234"));
        assert!(!is_valid_document_series("12  34"));
        assert!(!is_valid_document_series("12 345"));
        assert!(!is_valid_document_series("ab cd"));
    }

    #[test]
    fn test_occupation() {
        assert!(is_valid_occupation("Инженер"));
        assert!(is_valid_occupation("Врач-терапевт"));
        assert!(is_valid_occupation("Software Engineer"));
        assert!(is_valid_occupation("Зам. директора"));
        assert!(!is_valid_occupation("Маг"));
        assert!(!is_valid_occupation("Охотник на демонов"));
        assert!(!is_valid_occupation("Инженер 2"));
        assert!(!is_valid_occupation(""));
    }

    #[test]
    fn test_age() {
        assert!(is_valid_age(&FieldValue::from("45")));
        assert!(is_valid_age(&FieldValue::Integer(108)));
        assert!(is_valid_age(&FieldValue::Integer(1)));
        assert!(!is_valid_age(&FieldValue::from("150")));
        assert!(!is_valid_age(&FieldValue::from("0")));
        assert!(!is_valid_age(&FieldValue::Integer(109)));
        assert!(!is_valid_age(&FieldValue::Integer(-5)));
        assert!(!is_valid_age(&FieldValue::from("abc")));
        assert!(!is_valid_age(&FieldValue::from("45 лет")));
        assert!(is_valid_age(&FieldValue::Float(45.7)));
    }

    #[test]
    fn test_category_a() {
        assert!(is_valid_category_a("Анархистские"));
        assert!(is_valid_category_a("Либертарианские"));
        assert!(!is_valid_category_a("Фашистские"));
        assert!(!is_valid_category_a("анархистские"));
    }

    #[test]
    fn test_category_b() {
        assert!(is_valid_category_b("Секулярный гуманизм"));
        assert!(is_valid_category_b("Буддизм"));
        assert!(!is_valid_category_b("Сатанизм"));
        assert!(!is_valid_category_b("Буддизм1"));
    }

    #[test]
    fn test_address() {
        assert!(is_valid_address("ул. Ленина 5"));
        assert!(is_valid_address("Аллея Космонавтов 128"));
        assert!(is_valid_address("ул. Пушкина (стр. 2) 17"));
        assert!(!is_valid_address("Ленина"));
        assert!(!is_valid_address("ул. Ленина"));
        assert!(!is_valid_address("5 Ленина"));
    }
}
