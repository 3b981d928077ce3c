//! Raw per-district indicator data as read from `districts.json`.
//!
//! Every indicator group and every indicator inside a group is optional.
//! A missing value means "no adjustment" for the scorer that would read it.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub economics: Option<Economics>,
    pub demographics: Option<Demographics>,
    pub education: Option<Education>,
    pub health: Option<Health>,
    pub infrastructure: Option<Infrastructure>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Economics {
    pub gdp_growth: Option<f64>,
    pub unemployment_rate: Option<f64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub median_income: Option<f64>,
    pub population_growth: Option<f64>,
    pub age_distribution: Option<AgeDistribution>,
    pub education: Option<Attainment>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AgeDistribution {
    #[serde(rename = "65plus")]
    pub seniors: Option<f64>,
}

/// Share of adults holding a degree.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Attainment {
    pub bachelors: Option<f64>,
    pub graduate: Option<f64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub graduation_rate: Option<f64>,
    pub test_scores: Option<f64>,
    pub teacher_ratio: Option<f64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub life_expectancy: Option<f64>,
    pub access_to_care: Option<f64>,
    pub insurance_coverage: Option<f64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    pub road_quality: Option<f64>,
    pub broadband_access: Option<f64>,
    pub public_transport: Option<f64>,
}

impl District {
    /// Combined bachelors + graduate ratio, only when both shares are known.
    pub fn college_ratio(&self) -> Option<f64> {
        let edu = self.demographics.as_ref()?.education.as_ref()?;
        Some(edu.bachelors? + edu.graduate?)
    }
}

/// Districts keyed by id, kept in the order they appear in the input object.
#[derive(Debug, Default, Clone)]
pub struct DistrictSet {
    entries: Vec<(String, District)>,
}

impl DistrictSet {
    /// Parses a JSON object mapping district id to district record.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object, or if any entry has
    /// indicator fields of the wrong type.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(text).context("districts input is not a JSON object")?;

        let mut entries = Vec::with_capacity(raw.len());
        for (id, value) in raw {
            let district: District = serde_json::from_value(value)
                .with_context(|| format!("invalid record for district '{id}'"))?;
            entries.push((id, district));
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &District)> {
        self.entries.iter().map(|(id, d)| (id.as_str(), d))
    }

    pub fn get(&self, id: &str) -> Option<&District> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, d)| d)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
