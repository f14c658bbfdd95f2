//! Ingestion: listing pages → profile pages → validated raw records.
//!
//! Strictly sequential. Each URL is fetched once; failures are recorded in the
//! [`StageReport`] and the traversal moves on.

pub mod fetch;
pub mod listing;
pub mod locator;
pub mod profile;
pub mod validation;

use std::collections::HashSet;

use crate::domain::{FacultyType, Outcome, RawFacultyRecord, SkipReason, StageReport};
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
pub use listing::parse_listing_page;
pub use profile::parse_profile_page;
pub use validation::{REQUIRED_KEYS, is_valid_record, validate_record};

/// A listing page to traverse and the category its cards belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSource {
    pub url: String,
    pub faculty_type: FacultyType,
}

impl ListingSource {
    pub fn new(url: impl Into<String>, faculty_type: FacultyType) -> Self {
        Self {
            url: url.into(),
            faculty_type,
        }
    }
}

/// Scrape every listing and every profile it links to.
pub async fn scrape_all(
    fetcher: &dyn PageFetcher,
    sources: &[ListingSource],
) -> StageReport<RawFacultyRecord> {
    let mut report = StageReport::new();
    let mut visited: HashSet<String> = HashSet::new();

    for source in sources {
        tracing::info!("Scraping listing: {}", source.url);
        let html = match fetcher.fetch(&source.url).await {
            Ok(html) => html,
            Err(e) => {
                report.skip(&source.url, SkipReason::FetchFailed(e.to_string()));
                continue;
            }
        };

        let stubs = parse_listing_page(&html, &source.url, source.faculty_type);

        for stub in stubs {
            if !visited.insert(stub.profile_url.clone()) {
                report.skip(&stub.profile_url, SkipReason::Duplicate);
                continue;
            }

            tracing::info!("Scraping profile: {}", stub.profile_url);
            let outcome = match fetcher.fetch(&stub.profile_url).await {
                Ok(profile_html) => extract_profile(&profile_html, &stub),
                Err(e) => Outcome::Skipped(SkipReason::FetchFailed(e.to_string())),
            };
            report.record(&stub.profile_url, outcome);
        }
    }

    tracing::info!(
        "Scraped {} profiles; skips: {:?}",
        report.accepted.len(),
        report.skip_counts()
    );
    report
}

/// Extraction plus key validation for one fetched profile page
fn extract_profile(html: &str, stub: &crate::domain::ListingStub) -> Outcome<RawFacultyRecord> {
    let record = match parse_profile_page(html, stub) {
        Ok(record) => record,
        Err(e) => return Outcome::Skipped(SkipReason::ExtractionFailed(e.to_string())),
    };

    let candidate = match serde_json::to_value(&record) {
        Ok(value) => value,
        Err(e) => return Outcome::Skipped(SkipReason::Malformed(e.to_string())),
    };

    match validate_record(&candidate) {
        Ok(()) => Outcome::Accepted(record),
        Err(e) => Outcome::Skipped(e.into()),
    }
}
