//! Data types produced by the scoring stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five indicator domains a district is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Economic,
    Demographic,
    Education,
    Health,
    Infrastructure,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Economic,
        Category::Demographic,
        Category::Education,
        Category::Health,
        Category::Infrastructure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Economic => "economic",
            Category::Demographic => "demographic",
            Category::Education => "education",
            Category::Health => "health",
            Category::Infrastructure => "infrastructure",
        }
    }

    /// Capitalized name, as used in alert titles.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Economic => "Economic",
            Category::Demographic => "Demographic",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Infrastructure => "Infrastructure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded `0..=100` score for each category of one district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub economic: u8,
    pub demographic: u8,
    pub education: u8,
    pub health: u8,
    pub infrastructure: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Economic => self.economic,
            Category::Demographic => self.demographic,
            Category::Education => self.education,
            Category::Health => self.health,
            Category::Infrastructure => self.infrastructure,
        }
    }

    /// Scores in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Scores for one district from one run. Serialized into `scores.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub district_id: String,
    #[serde(flatten)]
    pub categories: CategoryScores,
    pub overall: u8,
    pub last_updated: DateTime<Utc>,
}
