//! Additive threshold bands.
//!
//! Each category starts at [`BASE_SCORE`]. Every indicator present in the
//! district is checked against its bands top to bottom; the first band that
//! matches adds its delta. The sum is clamped to `0..=100`.

use crate::district::District;

pub const BASE_SCORE: i32 = 50;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// A strict threshold on a raw indicator value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    Above(f64, i32),
    Below(f64, i32),
}

impl Band {
    /// Delta to apply when `value` falls in this band.
    pub fn delta_for(&self, value: f64) -> Option<i32> {
        match *self {
            Band::Above(threshold, delta) if value > threshold => Some(delta),
            Band::Below(threshold, delta) if value < threshold => Some(delta),
            _ => None,
        }
    }
}

/// One indicator of a category and its ordered bands.
pub struct Rule {
    pub indicator: &'static str,
    pub extract: fn(&District) -> Option<f64>,
    pub bands: &'static [Band],
}

impl Rule {
    /// First matching band for this rule, or `None` when the indicator is
    /// absent or its value falls between bands.
    pub fn evaluate(&self, district: &District) -> Option<Adjustment> {
        let value = (self.extract)(district)?;
        let delta = self.bands.iter().find_map(|band| band.delta_for(value))?;
        Some(Adjustment {
            indicator: self.indicator,
            value,
            delta,
        })
    }
}

/// A band that fired while scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub indicator: &'static str,
    pub value: f64,
    pub delta: i32,
}

/// Result of running a rule table over one district.
#[derive(Debug, Clone, PartialEq)]
pub struct BandOutcome {
    pub score: u8,
    pub adjustments: Vec<Adjustment>,
}

/// Scores `district` against `rules`.
pub fn apply_rules(district: &District, rules: &[Rule]) -> BandOutcome {
    let adjustments: Vec<Adjustment> = rules.iter().filter_map(|r| r.evaluate(district)).collect();
    let raw = BASE_SCORE + adjustments.iter().map(|a| a.delta).sum::<i32>();

    BandOutcome {
        score: raw.clamp(MIN_SCORE, MAX_SCORE) as u8,
        adjustments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::Health;

    fn life_expectancy(d: &District) -> Option<f64> {
        d.health.as_ref()?.life_expectancy
    }

    fn access(d: &District) -> Option<f64> {
        d.health.as_ref()?.access_to_care
    }

    static STEEP: &[Band] = &[Band::Above(1.0, 40), Band::Below(0.0, -40)];

    static RULES: &[Rule] = &[
        Rule {
            indicator: "lifeExpectancy",
            extract: life_expectancy,
            bands: STEEP,
        },
        Rule {
            indicator: "accessToCare",
            extract: access,
            bands: STEEP,
        },
    ];

    fn district(life: Option<f64>, access: Option<f64>) -> District {
        District {
            health: Some(Health {
                life_expectancy: life,
                access_to_care: access,
                insurance_coverage: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_band_is_strict() {
        assert_eq!(Band::Above(3.0, 20).delta_for(3.0), None);
        assert_eq!(Band::Above(3.0, 20).delta_for(3.01), Some(20));
        assert_eq!(Band::Below(4.0, 15).delta_for(4.0), None);
        assert_eq!(Band::Below(4.0, 15).delta_for(3.99), Some(15));
    }

    #[test]
    fn test_first_matching_band_wins() {
        static BANDS: &[Band] = &[Band::Above(3.0, 20), Band::Above(1.0, 10)];
        let rule = Rule {
            indicator: "lifeExpectancy",
            extract: life_expectancy,
            bands: BANDS,
        };
        let adj = rule.evaluate(&district(Some(5.0), None)).unwrap();
        assert_eq!(adj.delta, 20);
    }

    #[test]
    fn test_absent_indicator_contributes_nothing() {
        let outcome = apply_rules(&District::default(), RULES);
        assert_eq!(outcome.score, 50);
        assert!(outcome.adjustments.is_empty());
    }

    #[test]
    fn test_value_between_bands_contributes_nothing() {
        let outcome = apply_rules(&district(Some(0.5), None), RULES);
        assert_eq!(outcome.score, 50);
        assert!(outcome.adjustments.is_empty());
    }

    #[test]
    fn test_clamps_high_and_low() {
        assert_eq!(apply_rules(&district(Some(2.0), Some(2.0)), RULES).score, 100);
        assert_eq!(apply_rules(&district(Some(-1.0), Some(-1.0)), RULES).score, 0);
    }

    #[test]
    fn test_adjustments_record_indicator_and_value() {
        let outcome = apply_rules(&district(Some(2.0), Some(-3.0)), RULES);
        assert_eq!(outcome.score, 50);
        assert_eq!(
            outcome.adjustments,
            vec![
                Adjustment {
                    indicator: "lifeExpectancy",
                    value: 2.0,
                    delta: 40
                },
                Adjustment {
                    indicator: "accessToCare",
                    value: -3.0,
                    delta: -40
                },
            ]
        );
    }
}
