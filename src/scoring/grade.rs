use serde::Serialize;
use std::fmt;

/// Coarse label for a `0..=100` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreLevel::Excellent => "Excellent",
            ScoreLevel::Good => "Good",
            ScoreLevel::Fair => "Fair",
            ScoreLevel::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Converts a score into a [`ScoreLevel`].
///
/// | Range  | Level     |
/// |--------|-----------|
/// | >= 80  | Excellent |
/// | >= 60  | Good      |
/// | >= 40  | Fair      |
/// | < 40   | Poor      |
pub fn level(score: u8) -> ScoreLevel {
    match score {
        s if s >= 80 => ScoreLevel::Excellent,
        s if s >= 60 => ScoreLevel::Good,
        s if s >= 40 => ScoreLevel::Fair,
        _ => ScoreLevel::Poor,
    }
}
