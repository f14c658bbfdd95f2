//! Faculty records as they move through the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::sentinel;

/// Category a person was listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacultyType {
    Core,
    Adjunct,
    International,
    Distinguished,
    Practice,
}

impl FacultyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacultyType::Core => "core",
            FacultyType::Adjunct => "adjunct",
            FacultyType::International => "international",
            FacultyType::Distinguished => "distinguished",
            FacultyType::Practice => "practice",
        }
    }
}

impl fmt::Display for FacultyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacultyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "core" => Ok(FacultyType::Core),
            "adjunct" => Ok(FacultyType::Adjunct),
            "international" => Ok(FacultyType::International),
            "distinguished" => Ok(FacultyType::Distinguished),
            "practice" => Ok(FacultyType::Practice),
            other => Err(format!("Unknown faculty type: {}", other)),
        }
    }
}

/// One faculty card found on a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingStub {
    pub name: String,
    pub profile_url: String,
    pub faculty_type: FacultyType,
    pub source_listing_url: String,
}

/// Profile as extracted from markup, before any cleaning.
///
/// Missing markup yields empty strings, except `biography` which stays `None`
/// so the cleaner can tell "not on the page" apart from "empty on the page".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFacultyRecord {
    pub name: String,
    pub faculty_type: FacultyType,
    pub education: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub specialization: String,
    pub profile_url: String,
    pub biography: Option<String>,
    pub publications: Vec<String>,
    pub teaching: Vec<String>,
    pub source_listing_url: String,
    pub scraped_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, with = "sentinel")]
    pub phone: Option<String>,
    #[serde(default, with = "sentinel")]
    pub email: Option<String>,
    #[serde(default, with = "sentinel")]
    pub address: Option<String>,
}

/// Normalized profile. `None` scalars serialize as "Not Available".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedFacultyRecord {
    #[serde(default, with = "sentinel")]
    pub name: Option<String>,
    #[serde(default, with = "sentinel")]
    pub faculty_type: Option<String>,
    #[serde(default, with = "sentinel")]
    pub education: Option<String>,
    #[serde(default, with = "sentinel")]
    pub biography: Option<String>,
    #[serde(default, with = "sentinel")]
    pub specialization: Option<String>,
    #[serde(default)]
    pub teaching: Vec<String>,
    #[serde(default)]
    pub publications: Vec<String>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default, with = "sentinel")]
    pub profile_url: Option<String>,
}
