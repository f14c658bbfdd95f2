//! Domain layer - Pure pipeline abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Record types, per-record outcomes, trait definitions and domain error types.

pub mod errors;
pub mod faculty;
pub mod outcome;
pub mod repositories;
pub mod sentinel;

pub use errors::DomainError;
pub use faculty::*;
pub use outcome::{Outcome, Skip, SkipReason, StageReport};
pub use repositories::*;
