// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub crest_color: String,
    pub home_city: Option<String>,
    pub coach_name: Option<String>,
    pub founded_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub short_name: String,
    pub crest_color: Option<String>,
    pub home_city: Option<String>,
    pub coach_name: Option<String>,
    pub founded_year: Option<i32>,
}

/// Request to update team information
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamUpdateRequest {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub crest_color: Option<String>,
    pub home_city: Option<String>,
    pub coach_name: Option<String>,
    pub founded_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct TeamQueryParams {
    pub page: Option<i32>,
    pub limit: Option<i32>,
    pub search: Option<String>,
}

fn validate_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Team name cannot be empty".to_string());
    }

    if name.len() < 2 {
        return Err("Team name must be at least 2 characters".to_string());
    }

    if name.len() > 100 {
        return Err("Team name cannot exceed 100 characters".to_string());
    }

    if !name.chars().any(|c| c.is_alphanumeric()) {
        return Err("Team name must contain at least one letter or number".to_string());
    }

    Ok(())
}

fn validate_crest_color(color: &str) -> Result<(), String> {
    if !color.starts_with('#') || color.len() != 7 {
        return Err("Crest color must be a valid hex color (e.g., #FF0000)".to_string());
    }

    if !color[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Crest color must be a valid hex color".to_string());
    }

    Ok(())
}

impl CreateTeamRequest {
    /// Validate team creation request
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;

        let short_name = self.short_name.trim();
        if short_name.is_empty() || short_name.len() > 10 {
            return Err("Short name must be between 1 and 10 characters".to_string());
        }

        if let Some(color) = &self.crest_color {
            validate_crest_color(color)?;
        }

        if let Some(year) = self.founded_year {
            if !(1850..=2100).contains(&year) {
                return Err("Founded year is out of range".to_string());
            }
        }

        Ok(())
    }

    /// Get sanitized team name
    pub fn get_sanitized_name(&self) -> String {
        self.name
            .trim()
            .chars()
            .filter(|&c| c != '\0' && c != '\t' && c != '\r' && c != '\n')
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl TeamUpdateRequest {
    /// Validate team update request
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_none()
            && self.short_name.is_none()
            && self.crest_color.is_none()
            && self.home_city.is_none()
            && self.coach_name.is_none()
            && self.founded_year.is_none()
        {
            return Err("At least one field must be provided for update".to_string());
        }

        if let Some(name) = &self.name {
            validate_name(name)?;
        }

        if let Some(short_name) = &self.short_name {
            let short_name = short_name.trim();
            if short_name.is_empty() || short_name.len() > 10 {
                return Err("Short name must be between 1 and 10 characters".to_string());
            }
        }

        if let Some(color) = &self.crest_color {
            validate_crest_color(color)?;
        }

        if let Some(year) = self.founded_year {
            if !(1850..=2100).contains(&year) {
                return Err("Founded year is out of range".to_string());
            }
        }

        Ok(())
    }
}
