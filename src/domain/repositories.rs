//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;

use super::DomainError;
use crate::domain::CleanedFacultyRecord;

/// Contact sub-object as served. Empty object when the faculty has no contact row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Faculty row joined with its children, for API responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacultyView {
    pub id: i32,
    pub name: String,
    pub faculty_type: Option<String>,
    pub education: Option<String>,
    pub biography: Option<String>,
    pub specialization: Option<String>,
    pub profile_url: Option<String>,
    pub contact: ContactView,
    pub teaching: Vec<String>,
    pub publications: Vec<String>,
}

/// Counts written by one destructive load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub faculty: usize,
    pub contacts: usize,
    pub teaching: usize,
    pub publications: usize,
}

/// Repository trait for the faculty store
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    /// Drop and recreate every table, then insert all records in one transaction.
    /// Any failure rolls the whole load back.
    async fn replace_all(&self, records: &[CleanedFacultyRecord])
    -> Result<LoadSummary, DomainError>;

    /// Every faculty row joined with contact, teaching and publications
    async fn find_all(&self) -> Result<Vec<FacultyView>, DomainError>;
}
