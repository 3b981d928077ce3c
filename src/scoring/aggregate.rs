use crate::scoring::types::{Category, CategoryScores};
use serde::Serialize;

/// Category weights in percent. They sum to exactly 100.
static WEIGHTS: &[(Category, u32)] = &[
    (Category::Economic, 25),
    (Category::Demographic, 20),
    (Category::Education, 20),
    (Category::Health, 20),
    (Category::Infrastructure, 15),
];

/// Weight of `category` as a fraction of 1.0.
pub fn weight(category: Category) -> f64 {
    weight_percent(category) as f64 / 100.0
}

fn weight_percent(category: Category) -> u32 {
    WEIGHTS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, w)| *w)
        .unwrap_or(0)
}

/// Combines the category scores into the overall score.
///
/// The weighted sum is taken in hundredths so ties are exact, then rounded
/// half to even: a weighted sum of 62.5 gives 62, 63.5 gives 64.
pub fn overall_score(scores: &CategoryScores) -> u8 {
    let hundredths: u32 = scores
        .iter()
        .map(|(category, score)| score as u32 * weight_percent(category))
        .sum();

    let whole = hundredths / 100;
    let rest = hundredths % 100;
    let rounded = if rest > 50 || (rest == 50 && whole % 2 == 1) {
        whole + 1
    } else {
        whole
    };

    rounded as u8
}

/// One row of a score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: Category,
    pub score: u8,
    pub weight: f64,
    pub weighted_score: f64,
}

/// Per-category contribution to the overall score.
pub fn breakdown(scores: &CategoryScores) -> Vec<CategoryBreakdown> {
    scores
        .iter()
        .map(|(category, score)| CategoryBreakdown {
            category,
            score,
            weight: weight(category),
            weighted_score: score as f64 * weight(category),
        })
        .collect()
}
