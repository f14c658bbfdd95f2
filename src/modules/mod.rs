pub mod analytics;
pub mod ingestion;
pub mod transform;
