//! Raw record → cleaned record.

pub mod text;

use serde_json::{Map, Value};
use std::fmt;

use crate::domain::{CleanedFacultyRecord, Contact, Outcome, SkipReason, StageReport};
pub use text::{
    clean_address, clean_list, clean_string, normalize_whitespace, separate_education_and_biography,
    strip_html,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    NotAnObject,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::NotAnObject => write!(f, "record is not a JSON object"),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<TransformError> for SkipReason {
    fn from(e: TransformError) -> Self {
        match e {
            TransformError::NotAnObject => SkipReason::NotAnObject,
        }
    }
}

fn field<'a>(record: &'a Map<String, Value>, key: &str) -> &'a Value {
    record.get(key).unwrap_or(&Value::Null)
}

/// Clean one raw record. Missing or mistyped fields become absent values;
/// only a non-object input fails.
pub fn transform_record(record: &Value) -> Result<CleanedFacultyRecord, TransformError> {
    let record = record.as_object().ok_or(TransformError::NotAnObject)?;

    let education_raw = clean_string(field(record, "education"));
    let biography_raw = clean_string(field(record, "biography"));
    let (education, biography) = separate_education_and_biography(education_raw, biography_raw);

    Ok(CleanedFacultyRecord {
        name: clean_string(field(record, "name")),
        faculty_type: clean_string(field(record, "faculty_type")),
        education,
        biography,
        specialization: clean_string(field(record, "specialization")),
        teaching: clean_list(field(record, "teaching")),
        publications: clean_list(field(record, "publications")),
        contact: Contact {
            phone: clean_string(field(record, "phone")),
            email: clean_string(field(record, "email")),
            address: clean_address(field(record, "address")),
        },
        profile_url: clean_string(field(record, "profile_url")),
    })
}

/// Clean a whole batch. Records that fail are reported and skipped.
pub fn clean_records(records: &[Value]) -> StageReport<CleanedFacultyRecord> {
    let mut report = StageReport::new();
    for (index, record) in records.iter().enumerate() {
        let subject = record
            .get("profile_url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("record #{}", index));
        report.record(subject, Outcome::from(transform_record(record)));
    }
    tracing::info!(
        "Cleaned {} records ({} skipped)",
        report.accepted.len(),
        report.skipped.len()
    );
    report
}

impl CleanedFacultyRecord {
    /// Run the cleaning rules again over an already-cleaned record.
    pub fn normalized(&self) -> Self {
        let reclean = |value: &Option<String>| value.as_deref().and_then(text::clean_text);
        let (education, biography) =
            separate_education_and_biography(reclean(&self.education), reclean(&self.biography));

        Self {
            name: reclean(&self.name),
            faculty_type: reclean(&self.faculty_type),
            education,
            biography,
            specialization: reclean(&self.specialization),
            teaching: text::clean_items(self.teaching.iter().map(String::as_str)),
            publications: text::clean_items(self.publications.iter().map(String::as_str)),
            contact: Contact {
                phone: reclean(&self.contact.phone),
                email: reclean(&self.contact.email),
                address: self
                    .contact
                    .address
                    .as_deref()
                    .and_then(text::clean_address_text),
            },
            profile_url: reclean(&self.profile_url),
        }
    }
}
