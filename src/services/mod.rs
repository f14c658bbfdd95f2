//! Services Layer
//!
//! Stage orchestration on top of the ingestion, transform and analytics modules.
//! Each stage reads and writes its JSON artifact so stages can run separately.

pub mod pipeline_service;

pub use pipeline_service::*;
