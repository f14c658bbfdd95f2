use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

use super::specialization::tokenize_specialization;
use crate::domain::CleanedFacultyRecord;
use crate::domain::sentinel::{self, NOT_AVAILABLE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMeta {
    pub total_profiles: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageTextLengths {
    pub biography: f64,
}

/// Summary statistics over cleaned faculty records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorationReport {
    pub meta: ReportMeta,
    pub faculty_type_distribution: BTreeMap<String, usize>,
    pub missing_values_summary: BTreeMap<String, usize>,
    pub average_text_lengths: AverageTextLengths,
    /// Most frequent first; serialized as a JSON object in this order
    #[serde(serialize_with = "ordered_counts")]
    pub specialization_distribution: Vec<(String, usize)>,
}

fn ordered_counts<S>(counts: &[(String, usize)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(counts.iter().map(|(label, count)| (label, count)))
}

/// Counter that remembers first-seen order, for stable tie-breaking
#[derive(Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            }
        }
    }

    fn most_common(mut self) -> Vec<(String, usize)> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts
    }
}

pub fn build_report(records: &[CleanedFacultyRecord]) -> ExplorationReport {
    let mut faculty_types = BTreeMap::new();
    let mut missing: BTreeMap<String, usize> = BTreeMap::new();
    let mut specializations = OrderedCounter::default();
    let mut bio_lengths = Vec::new();

    for record in records {
        let faculty_type = record.faculty_type.as_deref().unwrap_or(NOT_AVAILABLE);
        *faculty_types.entry(faculty_type.to_string()).or_insert(0) += 1;

        let fields = [
            ("name", &record.name),
            ("faculty_type", &record.faculty_type),
            ("education", &record.education),
            ("biography", &record.biography),
            ("specialization", &record.specialization),
            ("profile_url", &record.profile_url),
            ("contact.phone", &record.contact.phone),
            ("contact.email", &record.contact.email),
            ("contact.address", &record.contact.address),
        ];
        for (field, value) in fields {
            let count = missing.entry(field.to_string()).or_insert(0);
            if sentinel::is_missing(value.as_deref()) {
                *count += 1;
            }
        }

        if let Some(bio) = record.biography.as_deref()
            && !sentinel::is_missing(Some(bio))
        {
            bio_lengths.push(bio.chars().count());
        }

        let tokens = tokenize_specialization(record.specialization.as_deref());
        if tokens.is_empty() {
            specializations.add(NOT_AVAILABLE);
        }
        for token in &tokens {
            specializations.add(token);
        }
    }

    let average_biography = if bio_lengths.is_empty() {
        0.0
    } else {
        let mean = bio_lengths.iter().sum::<usize>() as f64 / bio_lengths.len() as f64;
        (mean * 100.0).round() / 100.0
    };

    ExplorationReport {
        meta: ReportMeta {
            total_profiles: records.len(),
        },
        faculty_type_distribution: faculty_types,
        missing_values_summary: missing,
        average_text_lengths: AverageTextLengths {
            biography: average_biography,
        },
        specialization_distribution: specializations.most_common(),
    }
}
