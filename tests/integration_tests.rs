use chrono::{DateTime, Utc};
use district_scorer::alerts::types::{AlertStatus, Severity};
use district_scorer::config::PipelineConfig;
use district_scorer::pipeline::run;
use district_scorer::store::{ScoresDocument, read_alerts_document};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DISTRICTS: &str = include_str!("fixtures/districts.json");
const PRIOR_ALERTS: &str = include_str!("fixtures/prior_alerts.json");

fn at(ts: &str) -> DateTime<Utc> {
    ts.parse().unwrap()
}

fn read_scores(path: &Path) -> ScoresDocument {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Inputs and outputs share one directory, so each run's alerts document is
/// the next run's prior alerts.
fn shared_dir() -> (TempDir, PipelineConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("districts.json"), DISTRICTS).unwrap();
    fs::write(dir.path().join("alerts.json"), PRIOR_ALERTS).unwrap();
    let config = PipelineConfig::new(dir.path(), dir.path());
    (dir, config)
}

#[test]
fn test_full_pipeline() {
    let (_dir, config) = shared_dir();
    let summary = run(&config, at("2026-10-17T06:00:00Z")).unwrap();

    assert_eq!(summary.districts, 4);
    assert_eq!(summary.new_alerts, 15);
    assert_eq!(summary.total_alerts, 16);

    let scores = read_scores(&config.scores_output());
    assert_eq!(scores.metadata.total_districts, 4);
    assert_eq!(scores.metadata.version, "1.0.0");

    let ids: Vec<_> = scores.scores.iter().map(|s| s.district_id.as_str()).collect();
    assert_eq!(ids, vec!["D1", "CA-12", "MS-02", "EMPTY"]);

    let d1 = &scores.scores[0];
    assert_eq!(d1.categories.economic, 100);
    assert_eq!(d1.categories.health, 50);
    assert_eq!(d1.overall, 62);

    let ca = &scores.scores[1];
    assert_eq!(
        [
            ca.categories.economic,
            ca.categories.demographic,
            ca.categories.education,
            ca.categories.health,
            ca.categories.infrastructure
        ],
        [75, 85, 95, 100, 90]
    );
    assert_eq!(ca.overall, 88);

    let ms = &scores.scores[2];
    assert_eq!(
        [
            ms.categories.economic,
            ms.categories.demographic,
            ms.categories.education,
            ms.categories.health,
            ms.categories.infrastructure
        ],
        [10, 30, 10, 5, 10]
    );
    assert_eq!(ms.overall, 13);

    assert_eq!(scores.scores[3].overall, 50);

    for record in &scores.scores {
        assert!(record.overall <= 100);
        assert_eq!(record.last_updated, at("2026-10-17T06:00:00Z"));
    }
}

#[test]
fn test_alert_document_contents() {
    let (_dir, config) = shared_dir();
    run(&config, at("2026-10-17T06:00:00Z")).unwrap();

    let doc = read_alerts_document(&config.alerts_output()).unwrap();
    assert_eq!(doc.metadata.total_alerts, 16);
    assert_eq!(doc.metadata.active_alerts, 15);
    assert_eq!(doc.metadata.resolved_alerts, 1);

    // Prior alert is kept first, untouched, extra fields included.
    let prior = &doc.alerts[0];
    assert_eq!(prior.id, "price_CA-12_20261001");
    assert_eq!(prior.severity, Severity::Info);
    assert_eq!(prior.extra["currentValue"], 110.3);

    assert!(doc.alerts.iter().all(|a| a.district_id != "CA-12" || a.source == "pricing"));

    let critical: Vec<_> = doc
        .alerts
        .iter()
        .filter(|a| a.severity == Severity::Critical)
        .collect();
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].id, "score_MS-02_20261017");
    assert_eq!(
        critical[0].message,
        "District MS-02 has critically low overall score: 13"
    );

    let d1_warnings: Vec<_> = doc
        .alerts
        .iter()
        .filter(|a| a.district_id == "D1")
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(
        d1_warnings,
        vec![
            "demographic_D1_20261017",
            "education_D1_20261017",
            "health_D1_20261017",
            "infrastructure_D1_20261017",
        ]
    );
    assert!(doc.alerts[1..].iter().all(|a| a.status == AlertStatus::Active));
}

#[test]
fn test_rerun_replaces_scores_and_appends_alerts() {
    let (_dir, config) = shared_dir();

    let first = run(&config, at("2026-10-17T06:00:00Z")).unwrap();
    let first_scores = read_scores(&config.scores_output());

    let second = run(&config, at("2026-10-17T18:00:00Z")).unwrap();
    let second_scores = read_scores(&config.scores_output());

    assert_eq!(second_scores.scores.len(), first_scores.scores.len());
    for (a, b) in first_scores.scores.iter().zip(&second_scores.scores) {
        assert_eq!(a.district_id, b.district_id);
        assert_eq!(a.categories, b.categories);
        assert_eq!(a.overall, b.overall);
    }

    assert_eq!(second.new_alerts, first.new_alerts);
    assert_eq!(second.total_alerts, first.total_alerts + first.new_alerts);

    // Same-day rerun reuses ids; nothing is deduplicated.
    let doc = read_alerts_document(&config.alerts_output()).unwrap();
    let repeated = doc
        .alerts
        .iter()
        .filter(|a| a.id == "score_MS-02_20261017")
        .count();
    assert_eq!(repeated, 2);
}

#[test]
fn test_malformed_prior_alerts_aborts_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("districts.json"), DISTRICTS).unwrap();
    fs::write(dir.path().join("alerts.json"), "not json").unwrap();
    let out = dir.path().join("out");
    let config = PipelineConfig::new(dir.path(), &out);

    assert!(run(&config, Utc::now()).is_err());
    assert!(!out.exists());
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("districts.json"), DISTRICTS).unwrap();
    // A regular file where the output directory should be.
    let blocker = dir.path().join("out");
    fs::write(&blocker, "").unwrap();
    let config = PipelineConfig::new(dir.path(), &blocker);

    let err = run(&config, Utc::now()).unwrap_err();
    assert!(format!("{err:#}").contains("persist stage failed"));
}
