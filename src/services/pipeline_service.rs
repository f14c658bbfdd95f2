//! Pipeline Service - runs each stage and hands its output to the next through JSON files

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

use crate::domain::{
    CleanedFacultyRecord, DomainError, FacultyRepository, LoadSummary, Outcome, RawFacultyRecord,
    StageReport,
};
use crate::modules::analytics::{ExplorationReport, build_report};
use crate::modules::ingestion::{ListingSource, PageFetcher, scrape_all, validate_record};
use crate::modules::transform::clean_records;

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DomainError::External(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DomainError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    let body = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, body).await?;
    Ok(())
}

fn log_skips<T>(stage: &str, report: &StageReport<T>) {
    tracing::info!(
        "{}: {} accepted, {} skipped",
        stage,
        report.accepted.len(),
        report.skipped.len()
    );
    for (kind, count) in report.skip_counts() {
        tracing::info!("{}: skipped {} ({})", stage, count, kind);
    }
}

/// Crawl every listing and write the valid raw profiles to `output`
pub async fn scrape(
    fetcher: &dyn PageFetcher,
    sources: &[ListingSource],
    output: &Path,
) -> Result<StageReport<RawFacultyRecord>, DomainError> {
    let report = scrape_all(fetcher, sources).await;
    log_skips("scrape", &report);
    write_json(output, &report.accepted).await?;
    tracing::info!("Saved {} profiles to {}", report.accepted.len(), output.display());
    Ok(report)
}

/// Normalize the raw profiles in `input` and write the cleaned ones to `output`
pub async fn clean(
    input: &Path,
    output: &Path,
) -> Result<StageReport<CleanedFacultyRecord>, DomainError> {
    let raw: Vec<Value> = read_json(input).await?;

    // Key check on untyped input
    let mut checked: StageReport<Value> = StageReport::new();
    for (index, value) in raw.into_iter().enumerate() {
        let subject = value
            .get("profile_url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("record #{}", index));
        checked.record(subject, Outcome::from(validate_record(&value).map(|()| value)));
    }

    let mut report = clean_records(&checked.accepted);
    report.skipped.extend(checked.skipped);
    log_skips("clean", &report);
    write_json(output, &report.accepted).await?;
    tracing::info!("Saved {} cleaned profiles to {}", report.accepted.len(), output.display());
    Ok(report)
}

/// Replace the store's contents with the cleaned profiles in `input`
pub async fn load(repo: &dyn FacultyRepository, input: &Path) -> Result<LoadSummary, DomainError> {
    let records: Vec<CleanedFacultyRecord> = read_json(input).await?;
    repo.replace_all(&records).await
}

/// Compute exploration statistics over `input` and write them to `output`
pub async fn stats(input: &Path, output: &Path) -> Result<ExplorationReport, DomainError> {
    let records: Vec<CleanedFacultyRecord> = read_json(input).await?;
    let report = build_report(&records);
    write_json(output, &report).await?;
    tracing::info!("Saved exploration stats for {} profiles to {}", records.len(), output.display());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "faculty_directory_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn raw(profile_url: &str) -> Value {
        json!({
            "name": "  Jane   Doe ",
            "faculty_type": "core",
            "education": "PhD (CS)",
            "phone": "",
            "email": "jane@x.edu",
            "address": "#Room 101",
            "specialization": "Networks, Systems.",
            "profile_url": profile_url,
            "biography": "Jane works on systems.",
            "publications": ["P1", " "],
            "teaching": ["DSA"],
            "source_listing_url": "https://x.edu/faculty",
            "scraped_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_clean_then_stats() {
        let dir = scratch_dir("clean_stats");
        let raw_path = dir.join("faculty_profiles.json");
        let cleaned_path = dir.join("faculty_cleaned.json");
        let stats_path = dir.join("data_exploration_stats.json");

        write_json(&raw_path, &vec![raw("https://x.edu/jane"), json!("garbage")])
            .await
            .unwrap();

        let report = clean(&raw_path, &cleaned_path).await.unwrap();
        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.skipped.len(), 1);

        let cleaned: Vec<Value> = read_json(&cleaned_path).await.unwrap();
        assert_eq!(cleaned[0]["name"], "Jane Doe");
        assert_eq!(cleaned[0]["contact"]["phone"], "Not Available");
        assert_eq!(cleaned[0]["contact"]["address"], "Room 101");
        assert_eq!(cleaned[0]["publications"], json!(["P1"]));

        let stats = stats(&cleaned_path, &stats_path).await.unwrap();
        assert_eq!(stats.meta.total_profiles, 1);
        let written: Value = read_json(&stats_path).await.unwrap();
        assert_eq!(written["specialization_distribution"]["Networks"], 1);
        assert_eq!(written["specialization_distribution"]["Systems"], 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_clean_skips_records_missing_required_keys() {
        let dir = scratch_dir("missing_keys");
        let raw_path = dir.join("faculty_profiles.json");
        let cleaned_path = dir.join("faculty_cleaned.json");

        let mut partial = raw("https://x.edu/partial");
        partial.as_object_mut().unwrap().remove("scraped_at");
        write_json(&raw_path, &vec![raw("https://x.edu/jane"), partial])
            .await
            .unwrap();

        let report = clean(&raw_path, &cleaned_path).await.unwrap();

        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.accepted[0].profile_url.as_deref(), Some("https://x.edu/jane"));
        assert_eq!(report.skip_counts().get("missing_field"), Some(&1));
        assert_eq!(report.skipped[0].subject, "https://x.edu/partial");

        let cleaned: Vec<Value> = read_json(&cleaned_path).await.unwrap();
        assert_eq!(cleaned.len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_clean_missing_input_is_an_error() {
        let dir = scratch_dir("missing_input");
        let result = clean(&dir.join("nope.json"), &dir.join("out.json")).await;
        assert!(matches!(result, Err(DomainError::External(_))));
    }

    #[tokio::test]
    async fn test_clean_rejects_non_array_input() {
        let dir = scratch_dir("non_array");
        let raw_path = dir.join("faculty_profiles.json");
        write_json(&raw_path, &json!({"not": "a list"})).await.unwrap();

        let result = clean(&raw_path, &dir.join("out.json")).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
