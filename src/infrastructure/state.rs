//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::FacultyRepository;
use crate::infrastructure::SeaOrmFacultyRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub faculty_repo: Arc<dyn FacultyRepository>,
    /// Every successful faculty read is mirrored here
    pub mirror_path: PathBuf,
}

impl AppState {
    /// State backed by the SeaORM repository on `db`
    pub fn new(db: DatabaseConnection, mirror_path: PathBuf) -> Self {
        Self::with_repository(Arc::new(SeaOrmFacultyRepository::new(db)), mirror_path)
    }

    pub fn with_repository(faculty_repo: Arc<dyn FacultyRepository>, mirror_path: PathBuf) -> Self {
        Self {
            faculty_repo,
            mirror_path,
        }
    }
}
