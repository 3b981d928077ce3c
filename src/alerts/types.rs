//! Alert records and the summary written alongside them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlertStatus::Active => "active",
            AlertStatus::Resolved => "resolved",
        })
    }
}

/// A single alert, either loaded from a previous run or freshly derived.
///
/// `timestamp` is kept as the original text, and fields this crate does not
/// model (`previousValue`, `metadata`, ...) are kept in `extra`, so a loaded
/// alert is written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub source: String,
    pub district_id: String,
    pub timestamp: String,
    pub status: AlertStatus,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Counts reported in the alerts document metadata.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlertSummary {
    pub total: usize,
    pub active: usize,
    pub resolved: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[AlertRecord]) -> Self {
        let active = alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Active)
            .count();
        let resolved = alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Resolved)
            .count();

        Self {
            total: alerts.len(),
            active,
            resolved,
        }
    }
}
