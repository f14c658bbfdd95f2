use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use faculty_directory::config::Config;
use faculty_directory::db;
use faculty_directory::domain::FacultyType;
use faculty_directory::infrastructure::{AppState, SeaOrmFacultyRepository};
use faculty_directory::modules::ingestion::HttpFetcher;
use faculty_directory::{server, services};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot`
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"
    <html><body>
      <div class="facultyInformation">
        <ul>
          <li><h3><a href="/jane-doe">Jane Doe</a></h3></li>
          <li><h3><a href="">Nobody</a></h3></li>
          <li><h3><a href="/raj-kumar">Raj Kumar</a></h3></li>
        </ul>
      </div>
    </body></html>"#;

const JANE: &str = r#"
    <html><body>
      <div class="field--name-field-faculty-names">  Jane   Doe </div>
      <div class="field--name-field-faculty-name">PhD (Computer Science), MIT</div>
      <div class="field--name-field-contact-no">079-6826 1234</div>
      <div class="field--name-field-email"><div class="field__item">jane[at]example.edu</div></div>
      <div class="field--name-field-address"># 2104, Faculty Block 2</div>
      <div class="field--name-field-biography"><p>Jane works on distributed systems.</p></div>
      <div class="field--name-field-teaching"><p>Operating Systems</p><p>Distributed Computing</p></div>
      <div class="row">
        <div class="specializationIcon"><h2>Specialization</h2></div>
        <div class="work-exp"><p>Distributed Systems, Cloud Computing.</p></div>
      </div>
      <h2>Publications</h2>
      <ul class="bulletText"><li>J. Doe, Consensus at scale, 2021</li></ul>
    </body></html>"#;

const RAJ: &str = r#"
    <html><body>
      <div class="field--name-field-faculty-names">Raj Kumar</div>
    </body></html>"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "faculty_directory_it_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn test_config(base_url: &str, data_dir: PathBuf) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        data_dir,
        source_base_url: base_url.to_string(),
        fetch_timeout: Duration::from_secs(5),
        cors_allowed_origins: vec![],
    }
}

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;
    for (route, body) in [("/faculty", LISTING), ("/jane-doe", JANE), ("/raj-kumar", RAJ)] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
    }
    server
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_full_pipeline_against_mock_site() {
    let site = mock_site().await;
    let dir = scratch_dir("full");
    let config = test_config(&site.uri(), dir.clone());

    // Scrape: the other four listings 404 and are skipped
    let fetcher = HttpFetcher::new(config.fetch_timeout).unwrap();
    let scraped = services::scrape(&fetcher, &config.listing_sources(), &config.raw_profiles_path())
        .await
        .unwrap();
    assert_eq!(scraped.accepted.len(), 2);
    assert_eq!(scraped.accepted[0].faculty_type, FacultyType::Core);
    assert_eq!(scraped.accepted[0].profile_url, format!("{}/jane-doe", site.uri()));
    assert_eq!(scraped.skip_counts().get("fetch_failed"), Some(&4));

    // Clean
    let cleaned = services::clean(&config.raw_profiles_path(), &config.cleaned_profiles_path())
        .await
        .unwrap();
    assert_eq!(cleaned.accepted.len(), 2);
    let jane = &cleaned.accepted[0];
    assert_eq!(jane.name.as_deref(), Some("Jane Doe"));
    assert_eq!(jane.contact.address.as_deref(), Some("2104, Faculty Block 2"));
    assert_eq!(cleaned.accepted[1].education, None);

    // Load
    let db = db::init_db(&config.database_url).await.unwrap();
    let repo = SeaOrmFacultyRepository::new(db.clone());
    let summary = services::load(&repo, &config.cleaned_profiles_path())
        .await
        .unwrap();
    assert_eq!(summary.faculty, 2);
    assert_eq!(summary.teaching, 2);
    assert_eq!(summary.publications, 1);

    // Stats
    let stats = services::stats(&config.cleaned_profiles_path(), &config.stats_path())
        .await
        .unwrap();
    assert_eq!(stats.meta.total_profiles, 2);
    assert_eq!(stats.faculty_type_distribution.get("core"), Some(&2));
    assert!(config.stats_path().exists());

    // Serve
    let app = server::build_router(AppState::new(db, config.api_mirror_path()), &[]);
    let (status, body) = get(app, "/api/faculty").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Jane Doe");
    assert_eq!(rows[0]["faculty_type"], "core");
    assert_eq!(rows[0]["contact"]["email"], "jane[at]example.edu");
    assert_eq!(rows[0]["teaching"][1], "Distributed Computing");
    assert_eq!(rows[1]["name"], "Raj Kumar");
    assert_eq!(rows[1]["education"], "Not Available");
    assert_eq!(rows[1]["contact"]["phone"], "Not Available");

    let mirror: Value =
        serde_json::from_slice(&std::fs::read(config.api_mirror_path()).unwrap()).unwrap();
    assert_eq!(mirror, body);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_empty_store_is_not_found_and_not_mirrored() {
    let dir = scratch_dir("empty");
    let db = db::init_db("sqlite::memory:").await.unwrap();
    let mirror = dir.join("faculty_output.json");
    let app = server::build_router(AppState::new(db, mirror.clone()), &[]);

    let (status, body) = get(app, "/api/faculty").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No faculty data found");
    assert!(!mirror.exists());
}

#[tokio::test]
async fn test_health_check() {
    let db = db::init_db("sqlite::memory:").await.unwrap();
    let app = server::build_router(AppState::new(db, scratch_dir("health")), &[]);

    let (status, body) = get(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "faculty_directory");
}

#[tokio::test]
async fn test_reload_replaces_previous_contents() {
    let dir = scratch_dir("reload");
    let db = db::init_db("sqlite::memory:").await.unwrap();
    let repo = SeaOrmFacultyRepository::new(db.clone());
    let cleaned = dir.join("faculty_cleaned.json");

    services::write_json(
        &cleaned,
        &serde_json::json!([
            {"name": "A", "faculty_type": "core", "teaching": ["X"], "publications": [], "contact": {}},
            {"name": "B", "faculty_type": "adjunct", "teaching": [], "publications": [], "contact": {}}
        ]),
    )
    .await
    .unwrap();
    services::load(&repo, &cleaned).await.unwrap();

    services::write_json(
        &cleaned,
        &serde_json::json!([{"name": "C", "faculty_type": "practice", "contact": {}}]),
    )
    .await
    .unwrap();
    services::load(&repo, &cleaned).await.unwrap();

    let app = server::build_router(AppState::new(db, dir.join("faculty_output.json")), &[]);
    let (status, body) = get(app, "/api/faculty").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "C");
    assert_eq!(rows[0]["teaching"], serde_json::json!([]));

    let _ = std::fs::remove_dir_all(&dir);
}
