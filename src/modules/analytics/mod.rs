//! Exploration statistics over cleaned records

pub mod report;
pub mod specialization;

pub use report::{ExplorationReport, build_report};
pub use specialization::{is_valid_specialization, tokenize_specialization};
