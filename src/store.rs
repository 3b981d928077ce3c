//! File-backed input and output documents.
//!
//! Inputs are read-only: a districts object and a list of prior alerts, both
//! optional on disk. Outputs are overwritten in full on every run.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::alerts::types::{AlertRecord, AlertSummary};
use crate::district::DistrictSet;
use crate::scoring::types::ScoreRecord;

pub const DOCUMENT_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresMetadata {
    pub total_districts: usize,
    pub last_updated: DateTime<Utc>,
    pub version: String,
}

/// Contents of `scores.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoresDocument {
    pub scores: Vec<ScoreRecord>,
    pub metadata: ScoresMetadata,
}

impl ScoresDocument {
    pub fn new(scores: Vec<ScoreRecord>, now: DateTime<Utc>) -> Self {
        let metadata = ScoresMetadata {
            total_districts: scores.len(),
            last_updated: now,
            version: DOCUMENT_VERSION.to_string(),
        };
        Self { scores, metadata }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsMetadata {
    pub total_alerts: usize,
    pub active_alerts: usize,
    pub resolved_alerts: usize,
    pub last_updated: DateTime<Utc>,
    pub version: String,
}

/// Contents of the output `alerts.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlertsDocument {
    pub alerts: Vec<AlertRecord>,
    pub metadata: AlertsMetadata,
}

impl AlertsDocument {
    pub fn new(alerts: Vec<AlertRecord>, now: DateTime<Utc>) -> Self {
        let summary = AlertSummary::from_alerts(&alerts);
        let metadata = AlertsMetadata {
            total_alerts: summary.total,
            active_alerts: summary.active,
            resolved_alerts: summary.resolved,
            last_updated: now,
            version: DOCUMENT_VERSION.to_string(),
        };
        Self { alerts, metadata }
    }
}

/// Reads `path` to a string, or `None` when the file does not exist.
fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        info!(path = %path.display(), "Input file not found, using empty default");
        return Ok(None);
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Some(text))
}

/// Loads the districts object. A missing file yields an empty set.
pub fn load_districts(path: &Path) -> Result<DistrictSet> {
    let Some(text) = read_optional(path)? else {
        return Ok(DistrictSet::default());
    };
    let districts = DistrictSet::from_json_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(count = districts.len(), "Loaded districts");
    Ok(districts)
}

/// Loads previously persisted alerts. A missing file yields an empty list.
pub fn load_alerts(path: &Path) -> Result<Vec<AlertRecord>> {
    let Some(text) = read_optional(path)? else {
        return Ok(Vec::new());
    };
    let alerts =
        parse_alerts(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    info!(count = alerts.len(), "Loaded alerts");
    Ok(alerts)
}

/// Accepts either a bare list of alerts or a document written by a previous
/// run, and reports which entry is malformed.
fn parse_alerts(text: &str) -> Result<Vec<AlertRecord>> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut doc) => match doc.remove("alerts") {
            Some(Value::Array(entries)) => entries,
            Some(_) => bail!("`alerts` is not a JSON array"),
            None => bail!("expected a list of alerts or an object with an `alerts` list"),
        },
        _ => bail!("expected a list of alerts or an object with an `alerts` list"),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value(entry).with_context(|| format!("invalid alert at index {i}"))
        })
        .collect()
}

/// Serializes `value` as 2-space indented JSON.
pub fn to_json_bytes(value: &impl Serialize) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Writes `bytes` to `path`, replacing any existing file.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    debug!(path = %path.display(), bytes = bytes.len(), "Writing output file");
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

/// Reads the alerts document written by a previous run.
pub fn read_alerts_document(path: &Path) -> Result<AlertsDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
