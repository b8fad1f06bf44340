//! # Load-to-API Scenario
//!
//! Writes member and image sources to a temporary directory, loads them
//! through `senate-source` into a `Roster` and serves that roster through
//! the full API router and CLI renderers. A second scenario points the
//! loader at a missing file and checks the 503 error state.

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use senate_api::state::{AppConfig, AppState};
use senate_cli::OutputFormat;
use senate_core::{FilterState, SeatingParams};
use senate_source::{SourceConfig, SourceLocation};

const MEMBERS: &str = r#"{
    "objects": [
        {
            "person": {
                "bioguideid": "S000148",
                "firstname": "Charles",
                "lastname": "Schumer",
                "nickname": "Chuck",
                "gender": "male",
                "birthday": "1950-11-23",
                "twitterid": "SenSchumer",
                "youtubeid": "SenatorSchumer"
            },
            "party": "Democrat",
            "state": "NY",
            "senator_rank": "senior",
            "extra": {"office": "322 Hart Senate Office Building"},
            "startdate": "1999-01-03",
            "website": "https://www.schumer.senate.gov",
            "leadership_title": "Majority Leader"
        },
        {
            "person": {
                "bioguideid": "C001098",
                "firstname": "Ted",
                "lastname": "Cruz",
                "nickname": "",
                "gender": "male",
                "birthday": "1970-12-22",
                "twitterid": "SenTedCruz",
                "youtubeid": null
            },
            "party": "Republican",
            "state": "TX",
            "senator_rank": "junior",
            "extra": {},
            "startdate": "2013-01-03",
            "website": "https://www.cruz.senate.gov",
            "leadership_title": null
        },
        {
            "person": {
                "bioguideid": "C000127",
                "firstname": "Maria",
                "lastname": "Cantwell",
                "nickname": "",
                "gender": "female",
                "birthday": "1958-10-13",
                "twitterid": null,
                "youtubeid": null
            },
            "party": "Democrat",
            "state": "WA",
            "senator_rank": "senior",
            "extra": {},
            "startdate": "2001-01-03",
            "website": "",
            "leadership_title": null
        }
    ]
}"#;

const IMAGES: &str = r#"{
    "S000148": "https://img.example/S000148.jpg",
    "C001098": "https://img.example/C001098.jpg"
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn write_sources(dir: &Path) -> SourceConfig {
    let members = dir.join("senators.json");
    let images = dir.join("imgSources.json");
    std::fs::write(&members, MEMBERS).unwrap();
    std::fs::write(&images, IMAGES).unwrap();
    SourceConfig {
        members: SourceLocation::File(members),
        images: SourceLocation::File(images),
        ..SourceConfig::default()
    }
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn loaded_sources_are_served_by_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_sources(dir.path());
    let loaded = senate_source::load_roster(config, today()).await;
    let app = senate_api::app(AppState::from_load(
        AppConfig::default(),
        loaded,
        SeatingParams::default(),
    ));

    // Roster order follows the source file.
    let (status, body) = get_json(app.clone(), "/v1/members").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["S000148", "C001098", "C000127"]);

    // Image table joined by id; missing entries stay absent.
    let (_, schumer) = get_json(app.clone(), "/v1/members/S000148").await;
    assert_eq!(schumer["image_url"], "https://img.example/S000148.jpg");
    assert_eq!(schumer["youtube_url"], "https://www.youtube.com/SenatorSchumer");
    assert_eq!(schumer["office"], "322 Hart Senate Office Building");
    assert_eq!(schumer["age"], 74);
    assert_eq!(schumer["years_in_office"], 25);
    let (_, cantwell) = get_json(app.clone(), "/v1/members/C000127").await;
    assert!(cantwell["image_url"].is_null());
    assert!(cantwell["website"].is_null());

    // Filter across two fields.
    let (_, body) = get_json(app.clone(), "/v1/members?party=democrat&gender=female").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["members"][0]["last_name"], "Cantwell");

    // Overview statistics computed at load.
    let (_, stats) = get_json(app.clone(), "/v1/stats").await;
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["gender"][0]["percent"], 33);

    // Leadership: Republicans appear even without leaders.
    let (_, leaders) = get_json(app, "/v1/leaders").await;
    assert_eq!(leaders.as_array().unwrap().len(), 2);
    assert!(leaders[1]["leaders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_source_yields_error_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_sources(dir.path());
    config.members = SourceLocation::File(dir.path().join("absent.json"));

    let loaded = senate_source::load_roster(config, today()).await;
    assert!(loaded.is_err());
    let app = senate_api::app(AppState::from_load(
        AppConfig::default(),
        loaded,
        SeatingParams::default(),
    ));

    let (status, body) = get_json(app, "/v1/members").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("absent.json"));
}

#[test]
fn cli_renders_roster_loaded_from_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_sources(dir.path());
    let yaml = dir.path().join("senate.yaml");
    std::fs::write(
        &yaml,
        format!(
            "members: {}\nimages: {}\nseating:\n  group_size: 2\n",
            config.members, config.images
        ),
    )
    .unwrap();

    let (roster, sources) = senate_cli::load(Some(&yaml)).unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(sources.seating.group_size.get(), 2);

    let table =
        senate_cli::members::render_members(&roster, &FilterState::new(), OutputFormat::Table)
            .unwrap();
    assert!(table.contains("Charles \"Chuck\" Schumer"));
    assert!(table.ends_with("3 of 3 members\n"));

    let layout = roster.seating(&sources.seating);
    assert_eq!(layout.groups.len(), 2);
}
