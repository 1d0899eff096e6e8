// src/models/matches.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::league::outcome::{MatchOutcome, OutcomeCategory};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "live" => MatchStatus::Live,
            "finished" => MatchStatus::Finished,
            "postponed" => MatchStatus::Postponed,
            _ => MatchStatus::Scheduled,
        }
    }
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
            MatchStatus::Postponed => "postponed",
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub referee_id: Option<Uuid>,
    pub kickoff_time: DateTime<Utc>,
    pub matchday: i32,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub tournament_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub referee_id: Option<Uuid>,
    pub kickoff_time: DateTime<Utc>,
    pub matchday: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}

/// A match joined with the team names and colors needed for display
#[derive(Debug, FromRow, Serialize)]
pub struct MatchWithTeams {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fixture: Match,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_team_color: String,
    pub away_team_color: String,
}

/// One entry of a team's match history, seen from that team's perspective
#[derive(Debug, Serialize)]
pub struct TeamMatchRecord {
    pub match_id: Uuid,
    pub tournament_id: Uuid,
    pub kickoff_time: DateTime<Utc>,
    pub matchday: i32,
    pub status: MatchStatus,
    pub was_home: bool,
    pub opponent_id: Uuid,
    pub opponent_name: String,
    pub outcome: MatchOutcome,
    pub category: OutcomeCategory,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpcomingMatchesQuery {
    pub tournament_id: Option<Uuid>,
    pub limit: Option<i64>,
}

impl fmt::Display for UpcomingMatchesQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tournament_id: {:?}, limit: {:?}", self.tournament_id, self.limit)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecentResultsQuery {
    pub tournament_id: Option<Uuid>,
    pub limit: Option<i64>,
}

impl fmt::Display for RecentResultsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tournament_id: {:?}, limit: {:?}", self.tournament_id, self.limit)
    }
}
