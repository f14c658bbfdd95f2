use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::FacultyType;
use crate::modules::ingestion::ListingSource;

/// Listing paths on the source site and the category of each
const LISTING_PATHS: [(&str, FacultyType); 5] = [
    ("/faculty", FacultyType::Core),
    ("/adjunct-faculty", FacultyType::Adjunct),
    ("/adjunct-faculty-international", FacultyType::International),
    ("/distinguished-professor", FacultyType::Distinguished),
    ("/professor-practice", FacultyType::Practice),
];

pub const RAW_PROFILES_FILE: &str = "faculty_profiles.json";
pub const CLEANED_PROFILES_FILE: &str = "faculty_cleaned.json";
pub const API_MIRROR_FILE: &str = "faculty_output.json";
pub const STATS_FILE: &str = "data_exploration_stats.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub source_base_url: String,
    pub fetch_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://faculty.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            source_base_url: env::var("SOURCE_BASE_URL")
                .unwrap_or_else(|_| "https://www.daiict.ac.in".to_string()),
            fetch_timeout: Duration::from_secs(
                env::var("FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
            ),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        }
    }

    /// The five listing pages, in traversal order
    pub fn listing_sources(&self) -> Vec<ListingSource> {
        let base = self.source_base_url.trim_end_matches('/');
        LISTING_PATHS
            .iter()
            .map(|(path, faculty_type)| ListingSource::new(format!("{}{}", base, path), *faculty_type))
            .collect()
    }

    pub fn raw_profiles_path(&self) -> PathBuf {
        self.data_dir.join(RAW_PROFILES_FILE)
    }

    pub fn cleaned_profiles_path(&self) -> PathBuf {
        self.data_dir.join(CLEANED_PROFILES_FILE)
    }

    pub fn api_mirror_path(&self) -> PathBuf {
        self.data_dir.join(API_MIRROR_FILE)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }
}
