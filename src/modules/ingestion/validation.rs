//! Required-key check for raw records. Values are not inspected.

use serde_json::{Map, Value};
use std::fmt;

use crate::domain::SkipReason;

pub const REQUIRED_KEYS: [&str; 13] = [
    "name",
    "faculty_type",
    "education",
    "phone",
    "email",
    "address",
    "specialization",
    "profile_url",
    "biography",
    "publications",
    "teaching",
    "source_listing_url",
    "scraped_at",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotAnObject,
    MissingKey(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnObject => write!(f, "record is not an object"),
            ValidationError::MissingKey(key) => write!(f, "missing required key '{}'", key),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for SkipReason {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::NotAnObject => SkipReason::NotAnObject,
            ValidationError::MissingKey(key) => SkipReason::MissingField(key.to_string()),
        }
    }
}

pub fn check_keys(record: &Map<String, Value>) -> Result<(), ValidationError> {
    match REQUIRED_KEYS.iter().find(|key| !record.contains_key(**key)) {
        Some(key) => Err(ValidationError::MissingKey(*key)),
        None => Ok(()),
    }
}

pub fn validate_record(record: &Value) -> Result<(), ValidationError> {
    let object = record.as_object().ok_or(ValidationError::NotAnObject)?;
    check_keys(object)
}

pub fn is_valid_record(record: &Value) -> bool {
    validate_record(record).is_ok()
}
