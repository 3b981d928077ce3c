//! District scoring.
//!
//! Each district gets five bounded category scores from additive threshold
//! bands, and an overall score from a fixed weighted average of the five.

pub mod aggregate;
pub mod bands;
pub mod categories;
pub mod grade;
pub mod types;

use crate::district::{District, DistrictSet};
use aggregate::overall_score;
use categories::score_categories;
use chrono::{DateTime, Utc};
use types::ScoreRecord;

/// Scores a single district.
pub fn score_district(id: &str, district: &District, now: DateTime<Utc>) -> ScoreRecord {
    let categories = score_categories(district);
    ScoreRecord {
        district_id: id.to_string(),
        categories,
        overall: overall_score(&categories),
        last_updated: now,
    }
}

/// Scores every district, in input order.
pub fn score_districts(districts: &DistrictSet, now: DateTime<Utc>) -> Vec<ScoreRecord> {
    districts
        .iter()
        .map(|(id, district)| score_district(id, district, now))
        .collect()
}
