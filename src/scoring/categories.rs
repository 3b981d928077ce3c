//! Band tables for the five category scorers.

use crate::district::District;
use crate::scoring::bands::{BandOutcome, Rule, apply_rules};
use crate::scoring::bands::Band::{Above, Below};
use crate::scoring::types::{Category, CategoryScores};

static ECONOMIC: &[Rule] = &[
    Rule {
        indicator: "gdpGrowth",
        extract: |d| d.economics.as_ref()?.gdp_growth,
        bands: &[Above(3.0, 20), Above(1.0, 10), Below(-1.0, -15)],
    },
    Rule {
        indicator: "unemploymentRate",
        extract: |d| d.economics.as_ref()?.unemployment_rate,
        bands: &[Below(4.0, 15), Below(6.0, 5), Above(8.0, -15)],
    },
    Rule {
        indicator: "medianIncome",
        extract: |d| d.demographics.as_ref()?.median_income,
        bands: &[
            Above(100_000.0, 15),
            Above(70_000.0, 10),
            Below(50_000.0, -10),
        ],
    },
];

static DEMOGRAPHIC: &[Rule] = &[
    Rule {
        indicator: "populationGrowth",
        extract: |d| d.demographics.as_ref()?.population_growth,
        bands: &[Above(2.0, 15), Above(0.0, 10), Below(-1.0, -10)],
    },
    Rule {
        indicator: "ageDistribution.65plus",
        extract: |d| d.demographics.as_ref()?.age_distribution.as_ref()?.seniors,
        bands: &[Below(0.15, 10), Above(0.25, -10)],
    },
    Rule {
        indicator: "education.collegeRatio",
        extract: District::college_ratio,
        bands: &[Above(0.6, 15), Above(0.4, 10)],
    },
];

static EDUCATION: &[Rule] = &[
    Rule {
        indicator: "graduationRate",
        extract: |d| d.education.as_ref()?.graduation_rate,
        bands: &[Above(90.0, 20), Above(80.0, 15), Below(70.0, -15)],
    },
    Rule {
        indicator: "testScores",
        extract: |d| d.education.as_ref()?.test_scores,
        bands: &[Above(80.0, 15), Above(70.0, 10), Below(60.0, -15)],
    },
    Rule {
        indicator: "teacherRatio",
        extract: |d| d.education.as_ref()?.teacher_ratio,
        bands: &[Below(18.0, 10), Above(25.0, -10)],
    },
];

static HEALTH: &[Rule] = &[
    Rule {
        indicator: "lifeExpectancy",
        extract: |d| d.health.as_ref()?.life_expectancy,
        bands: &[Above(80.0, 20), Above(75.0, 15), Below(70.0, -15)],
    },
    Rule {
        indicator: "accessToCare",
        extract: |d| d.health.as_ref()?.access_to_care,
        bands: &[Above(0.9, 15), Above(0.8, 10), Below(0.7, -15)],
    },
    Rule {
        indicator: "insuranceCoverage",
        extract: |d| d.health.as_ref()?.insurance_coverage,
        bands: &[Above(0.95, 15), Above(0.85, 10), Below(0.75, -15)],
    },
];

static INFRASTRUCTURE: &[Rule] = &[
    Rule {
        indicator: "roadQuality",
        extract: |d| d.infrastructure.as_ref()?.road_quality,
        bands: &[Above(0.8, 15), Above(0.6, 10), Below(0.4, -15)],
    },
    Rule {
        indicator: "broadbandAccess",
        extract: |d| d.infrastructure.as_ref()?.broadband_access,
        bands: &[Above(0.9, 15), Above(0.7, 10), Below(0.5, -15)],
    },
    Rule {
        indicator: "publicTransport",
        extract: |d| d.infrastructure.as_ref()?.public_transport,
        bands: &[Above(0.8, 10), Below(0.3, -10)],
    },
];

/// Rule table for `category`.
pub fn rules_for(category: Category) -> &'static [Rule] {
    match category {
        Category::Economic => ECONOMIC,
        Category::Demographic => DEMOGRAPHIC,
        Category::Education => EDUCATION,
        Category::Health => HEALTH,
        Category::Infrastructure => INFRASTRUCTURE,
    }
}

/// Scores one category, keeping the list of bands that fired.
pub fn evaluate(district: &District, category: Category) -> BandOutcome {
    apply_rules(district, rules_for(category))
}

pub fn category_score(district: &District, category: Category) -> u8 {
    evaluate(district, category).score
}

pub fn score_categories(district: &District) -> CategoryScores {
    CategoryScores {
        economic: category_score(district, Category::Economic),
        demographic: category_score(district, Category::Demographic),
        education: category_score(district, Category::Education),
        health: category_score(district, Category::Health),
        infrastructure: category_score(district, Category::Infrastructure),
    }
}
