//! Flat CSV export of a run's scores.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;

use crate::scoring::grade::level;
use crate::scoring::types::ScoreRecord;

/// One CSV row per district.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreRow<'a> {
    district_id: &'a str,
    economic: u8,
    demographic: u8,
    education: u8,
    health: u8,
    infrastructure: u8,
    overall: u8,
    level: String,
    last_updated: DateTime<Utc>,
}

impl<'a> From<&'a ScoreRecord> for ScoreRow<'a> {
    fn from(r: &'a ScoreRecord) -> Self {
        ScoreRow {
            district_id: &r.district_id,
            economic: r.categories.economic,
            demographic: r.categories.demographic,
            education: r.categories.education,
            health: r.categories.health,
            infrastructure: r.categories.infrastructure,
            overall: r.overall,
            level: level(r.overall).to_string(),
            last_updated: r.last_updated,
        }
    }
}

/// Renders score records as CSV text, header included.
pub fn scores_to_csv(scores: &[ScoreRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    for record in scores {
        writer.serialize(ScoreRow::from(record))?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to finish CSV buffer: {}", e.error()))
}
