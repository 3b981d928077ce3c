//! Threshold alerts derived from freshly computed scores.
//!
//! A district whose overall score is below [`CRITICAL_OVERALL_BELOW`] gets a
//! `critical` alert; each category below [`WARNING_CATEGORY_BELOW`] gets a
//! `warning`. New alerts are appended to the existing list, never merged.

pub mod filter;
pub mod types;

use crate::scoring::types::ScoreRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use types::{AlertRecord, AlertStatus, Severity};

pub const CRITICAL_OVERALL_BELOW: u8 = 50;
pub const WARNING_CATEGORY_BELOW: u8 = 60;
pub const ALERT_SOURCE: &str = "scoring";

fn new_alert(
    key: &str,
    district_id: &str,
    severity: Severity,
    title: String,
    message: String,
    now: DateTime<Utc>,
) -> AlertRecord {
    AlertRecord {
        id: format!("{}_{}_{}", key, district_id, now.format("%Y%m%d")),
        title,
        message,
        severity,
        source: ALERT_SOURCE.to_string(),
        district_id: district_id.to_string(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        status: AlertStatus::Active,
        extra: serde_json::Map::new(),
    }
}

/// Alerts for one district: the critical alert first, then category warnings
/// in category order.
pub fn alerts_for(record: &ScoreRecord, now: DateTime<Utc>) -> Vec<AlertRecord> {
    let id = record.district_id.as_str();
    let mut alerts = Vec::new();

    if record.overall < CRITICAL_OVERALL_BELOW {
        alerts.push(new_alert(
            "score",
            id,
            Severity::Critical,
            format!("Critical Score Alert - {id}"),
            format!(
                "District {id} has critically low overall score: {}",
                record.overall
            ),
            now,
        ));
    }

    for (category, score) in record.categories.iter() {
        if score < WARNING_CATEGORY_BELOW {
            alerts.push(new_alert(
                category.as_str(),
                id,
                Severity::Warning,
                format!("{} Score Warning - {id}", category.title()),
                format!("District {id} has low {category} score: {score}"),
                now,
            ));
        }
    }

    alerts
}

/// Derives alerts for every score record, in record order.
pub fn derive_alerts(scores: &[ScoreRecord], now: DateTime<Utc>) -> Vec<AlertRecord> {
    scores.iter().flat_map(|r| alerts_for(r, now)).collect()
}

/// Appends `new` to `existing` without deduplicating.
pub fn append_alerts(mut existing: Vec<AlertRecord>, new: Vec<AlertRecord>) -> Vec<AlertRecord> {
    existing.extend(new);
    existing
}
