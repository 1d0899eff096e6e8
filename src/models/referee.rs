// src/models/referee.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Referee {
    pub id: Uuid,
    pub full_name: String,
    pub nationality: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateRefereeRequest {
    pub full_name: String,
    pub nationality: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateRefereeRequest {
    pub full_name: Option<String>,
    pub nationality: Option<String>,
}
