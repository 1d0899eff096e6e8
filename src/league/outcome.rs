use std::cmp::Ordering;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A match result seen from one team's perspective
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
    Pending,
}

impl MatchResult {
    /// Get the inverse result (from the opponent's perspective)
    pub fn inverse(&self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Loss => MatchResult::Win,
            MatchResult::Draw => MatchResult::Draw,
            MatchResult::Pending => MatchResult::Pending,
        }
    }

    /// Single-letter form notation ('-' while the match is pending)
    pub fn as_char(&self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Loss => 'L',
            MatchResult::Draw => 'D',
            MatchResult::Pending => '-',
        }
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Display bucket for a result badge
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    Positive,
    Negative,
    Neutral,
    Pending,
}

impl OutcomeCategory {
    /// Get color hex code for UI display
    pub fn color(&self) -> &'static str {
        match self {
            OutcomeCategory::Positive => "#22C55E", // Green
            OutcomeCategory::Negative => "#EF4444", // Red
            OutcomeCategory::Neutral => "#F59E0B",  // Amber
            OutcomeCategory::Pending => "#9CA3AF",  // Gray
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeCategory::Positive => "positive",
            OutcomeCategory::Negative => "negative",
            OutcomeCategory::Neutral => "neutral",
            OutcomeCategory::Pending => "pending",
        }
    }
}

/// Scores and result of a match from the perspective team's point of view.
/// Scores are absent exactly when the result is pending.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub perspective_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub result: MatchResult,
}

impl MatchOutcome {
    pub fn category(&self) -> OutcomeCategory {
        match self.result {
            MatchResult::Win => OutcomeCategory::Positive,
            MatchResult::Loss => OutcomeCategory::Negative,
            MatchResult::Draw => OutcomeCategory::Neutral,
            MatchResult::Pending => OutcomeCategory::Pending,
        }
    }
}

/// Classify a match from the point of view of either the home or the away
/// team. A match with any missing score is pending and no comparison is
/// performed.
pub fn classify_outcome(
    home_score: Option<i32>,
    away_score: Option<i32>,
    perspective_is_home: bool,
) -> MatchOutcome {
    let (perspective_score, opponent_score) = match (home_score, away_score) {
        (Some(home), Some(away)) => {
            if perspective_is_home {
                (home, away)
            } else {
                (away, home)
            }
        }
        _ => {
            return MatchOutcome {
                perspective_score: None,
                opponent_score: None,
                result: MatchResult::Pending,
            };
        }
    };

    let result = match perspective_score.cmp(&opponent_score) {
        Ordering::Greater => MatchResult::Win,
        Ordering::Less => MatchResult::Loss,
        Ordering::Equal => MatchResult::Draw,
    };

    MatchOutcome {
        perspective_score: Some(perspective_score),
        opponent_score: Some(opponent_score),
        result,
    }
}
