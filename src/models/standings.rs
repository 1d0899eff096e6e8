// src/models/standings.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::tournament::Tournament;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamStanding {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub team_id: Uuid,
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub points: i32,
    pub position: i32,
    pub last_updated: DateTime<Utc>,
}

impl TeamStanding {
    /// Goals scored minus goals conceded. Always derived, never stored.
    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    /// Points as they should be (3 per win, 1 per draw)
    pub fn calculate_points(&self) -> i32 {
        self.wins * 3 + self.draws
    }

    /// Share of available points taken, as a percentage
    pub fn form_percentage(&self) -> f32 {
        if self.matches_played == 0 {
            return 0.0;
        }
        (self.points as f32) / (self.matches_played as f32 * 3.0) * 100.0
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingWithTeam {
    pub standing: TeamStanding,
    pub team_name: String,
    pub team_color: String,
    pub goal_difference: i32,
    pub recent_form: Vec<char>, // W, D, L for last 5 finished matches
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub tournament: Tournament,
    pub standings: Vec<StandingWithTeam>,
    pub last_updated: DateTime<Utc>,
}
