// src/models/player.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "goalkeeper",
            PlayerPosition::Defender => "defender",
            PlayerPosition::Midfielder => "midfielder",
            PlayerPosition::Forward => "forward",
        }
    }
}

impl From<String> for PlayerPosition {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "goalkeeper" => PlayerPosition::Goalkeeper,
            "defender" => PlayerPosition::Defender,
            "forward" => PlayerPosition::Forward,
            _ => PlayerPosition::Midfielder,
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Option<Uuid>,
    pub full_name: String,
    pub position: PlayerPosition,
    pub shirt_number: Option<i32>,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePlayerRequest {
    pub team_id: Option<Uuid>,
    pub full_name: String,
    pub position: PlayerPosition,
    pub shirt_number: Option<i32>,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdatePlayerRequest {
    pub team_id: Option<Uuid>,
    pub full_name: Option<String>,
    pub position: Option<PlayerPosition>,
    pub shirt_number: Option<i32>,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerQueryParams {
    pub page: Option<i32>,
    pub limit: Option<i32>,
    pub position: Option<PlayerPosition>,
    pub search: Option<String>,
    pub team_id: Option<Uuid>,
}

impl CreatePlayerRequest {
    pub fn validate(&self) -> Result<(), String> {
        let name = self.full_name.trim();
        if name.is_empty() {
            return Err("Player name cannot be empty".to_string());
        }

        if name.len() > 100 {
            return Err("Player name cannot exceed 100 characters".to_string());
        }

        if let Some(number) = self.shirt_number {
            if !(1..=99).contains(&number) {
                return Err("Shirt number must be between 1 and 99".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shirt_number_bounds_are_enforced() {
        let mut request = CreatePlayerRequest {
            team_id: None,
            full_name: "Lia Torres".to_string(),
            position: PlayerPosition::Forward,
            shirt_number: Some(9),
            nationality: None,
            birth_date: None,
        };
        assert!(request.validate().is_ok());

        request.shirt_number = Some(0);
        assert!(request.validate().is_err());

        request.shirt_number = Some(100);
        assert!(request.validate().is_err());
    }
}
