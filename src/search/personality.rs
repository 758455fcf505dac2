use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Below any score a maximising aggregate can return.
pub const SCORE_FLOOR: i32 = -1024;
/// Above any score a minimising aggregate can return.
pub const SCORE_CEILING: i32 = 1024;

/// How the search folds child scores into a parent score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    /// Best continuation.
    #[default]
    Moderate,
    /// Best continuation of negated leaf scores: deliberately plays badly.
    Generous,
    /// Sum of all continuations: favours positions with many good lines.
    Aggressive,
    /// Worst continuation.
    Cautious,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Moderate,
        Personality::Generous,
        Personality::Aggressive,
        Personality::Cautious,
    ];

    /// Applied to every terminal score.
    #[inline]
    pub fn adjust_leaf(self, score: i32) -> i32 {
        match self {
            Personality::Generous => -score,
            _ => score,
        }
    }

    pub fn aggregate(self, scores: impl IntoIterator<Item = i32>) -> i32 {
        let scores = scores.into_iter();
        match self {
            Personality::Moderate | Personality::Generous => scores.fold(SCORE_FLOOR, i32::max),
            Personality::Aggressive => scores.fold(0, i32::saturating_add),
            Personality::Cautious => scores.fold(SCORE_CEILING, i32::min),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Personality::Moderate => "moderate",
            Personality::Generous => "generous",
            Personality::Aggressive => "aggressive",
            Personality::Cautious => "cautious",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Personality {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Personality::ALL
            .into_iter()
            .find(|p| p.name() == lower || (lower.len() == 1 && p.name().starts_with(lower.as_str())))
            .ok_or_else(|| ConfigError::UnknownPersonality(s.to_string()))
    }
}
