use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::matches::CreateMatchRequest;
use crate::models::tournament::CreateTournamentRequest;

/// Centralized validation service for league operations
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate tournament creation request
    pub fn validate_create_tournament_request(
        &self,
        request: &CreateTournamentRequest,
    ) -> Result<(), sqlx::Error> {
        self.validate_tournament_name(&request.name)?;

        if request.season.trim().is_empty() {
            return Err(sqlx::Error::Protocol("Season label cannot be empty".into()));
        }

        self.validate_date_range(request.start_date, request.end_date)?;

        Ok(())
    }

    /// Validate tournament name
    pub fn validate_tournament_name(&self, name: &str) -> Result<(), sqlx::Error> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(sqlx::Error::Protocol("Tournament name cannot be empty".into()));
        }

        if trimmed_name.len() > 255 {
            return Err(sqlx::Error::Protocol(
                "Tournament name too long (maximum 255 characters)".into(),
            ));
        }

        if trimmed_name.contains('\0') {
            return Err(sqlx::Error::Protocol(
                "Tournament name contains invalid characters".into(),
            ));
        }

        // Ensure name has actual content (not just whitespace/special chars)
        if !trimmed_name.chars().any(|c| c.is_alphanumeric()) {
            return Err(sqlx::Error::Protocol(
                "Tournament name must contain alphanumeric characters".into(),
            ));
        }

        Ok(())
    }

    /// Validate fixture creation request
    pub fn validate_create_match_request(
        &self,
        request: &CreateMatchRequest,
    ) -> Result<(), sqlx::Error> {
        self.validate_tournament_id(request.tournament_id)?;
        self.validate_team_id(request.home_team_id)?;
        self.validate_team_id(request.away_team_id)?;

        if request.home_team_id == request.away_team_id {
            return Err(sqlx::Error::Protocol(
                "A team cannot play against itself".into(),
            ));
        }

        self.validate_matchday(request.matchday)?;

        Ok(())
    }

    /// Validate final match scores
    pub fn validate_match_scores(&self, home_score: i32, away_score: i32) -> Result<(), sqlx::Error> {
        if home_score < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Home score cannot be negative: {}", home_score).into(),
            ));
        }

        if away_score < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Away score cannot be negative: {}", away_score).into(),
            ));
        }

        // Reasonable upper limit (prevent obvious data entry errors)
        const MAX_REASONABLE_SCORE: i32 = 50;
        if home_score > MAX_REASONABLE_SCORE {
            return Err(sqlx::Error::Protocol(
                format!("Home score too high: {} (max {})", home_score, MAX_REASONABLE_SCORE).into(),
            ));
        }

        if away_score > MAX_REASONABLE_SCORE {
            return Err(sqlx::Error::Protocol(
                format!("Away score too high: {} (max {})", away_score, MAX_REASONABLE_SCORE).into(),
            ));
        }

        Ok(())
    }

    /// Validate team ID for operations
    pub fn validate_team_id(&self, team_id: Uuid) -> Result<(), sqlx::Error> {
        if team_id.is_nil() {
            return Err(sqlx::Error::Protocol("Team ID cannot be nil".into()));
        }
        Ok(())
    }

    /// Validate tournament ID
    pub fn validate_tournament_id(&self, tournament_id: Uuid) -> Result<(), sqlx::Error> {
        if tournament_id.is_nil() {
            return Err(sqlx::Error::Protocol("Tournament ID cannot be nil".into()));
        }
        Ok(())
    }

    /// Validate match ID
    pub fn validate_match_id(&self, match_id: Uuid) -> Result<(), sqlx::Error> {
        if match_id.is_nil() {
            return Err(sqlx::Error::Protocol("Match ID cannot be nil".into()));
        }
        Ok(())
    }

    /// Validate matchday number
    pub fn validate_matchday(&self, matchday: i32) -> Result<(), sqlx::Error> {
        if matchday < 1 {
            return Err(sqlx::Error::Protocol(
                format!("Matchday must be positive: {}", matchday).into(),
            ));
        }

        if matchday > 100 {
            return Err(sqlx::Error::Protocol(
                format!("Matchday too high: {} (max 100)", matchday).into(),
            ));
        }

        Ok(())
    }

    /// Validate pagination parameters
    pub fn validate_pagination(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<(i64, i64), sqlx::Error> {
        let limit = limit.unwrap_or(10);
        let offset = offset.unwrap_or(0);

        if limit < 1 {
            return Err(sqlx::Error::Protocol("Limit must be positive".into()));
        }

        if limit > 1000 {
            return Err(sqlx::Error::Protocol("Limit too high (max 1000)".into()));
        }

        if offset < 0 {
            return Err(sqlx::Error::Protocol("Offset cannot be negative".into()));
        }

        Ok((limit, offset))
    }

    /// Validate date range for tournaments and queries
    pub fn validate_date_range(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        if start_date >= end_date {
            return Err(sqlx::Error::Protocol("Start date must be before end date".into()));
        }

        if end_date - start_date > chrono::Duration::days(730) {
            return Err(sqlx::Error::Protocol("Date range too large (max 2 years)".into()));
        }

        Ok(())
    }

    /// Comprehensive input sanitization
    pub fn sanitize_string_input(&self, input: &str) -> String {
        input
            .trim()
            .chars()
            .filter(|&c| c != '\0') // Remove null bytes
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn rejects_negative_and_absurd_scores() {
        let validator = LeagueValidator::new();
        assert!(validator.validate_match_scores(-1, 0).is_err());
        assert!(validator.validate_match_scores(0, -3).is_err());
        assert!(validator.validate_match_scores(51, 0).is_err());
        assert!(validator.validate_match_scores(3, 1).is_ok());
        assert!(validator.validate_match_scores(0, 0).is_ok());
    }

    #[test]
    fn rejects_fixture_where_team_plays_itself() {
        let validator = LeagueValidator::new();
        let team_id = Uuid::new_v4();
        let request = CreateMatchRequest {
            tournament_id: Uuid::new_v4(),
            home_team_id: team_id,
            away_team_id: team_id,
            referee_id: None,
            kickoff_time: Utc::now() + Duration::days(7),
            matchday: 1,
        };
        assert!(validator.validate_create_match_request(&request).is_err());
    }

    #[test]
    fn rejects_inverted_date_ranges() {
        let validator = LeagueValidator::new();
        let now = Utc::now();
        assert!(validator.validate_date_range(now, now - Duration::days(1)).is_err());
        assert!(validator.validate_date_range(now, now + Duration::days(120)).is_ok());
    }

    #[test]
    fn pagination_defaults_and_bounds() {
        let validator = LeagueValidator::new();
        assert_eq!(validator.validate_pagination(None, None).unwrap(), (10, 0));
        assert!(validator.validate_pagination(Some(0), None).is_err());
        assert!(validator.validate_pagination(Some(2000), None).is_err());
        assert!(validator.validate_pagination(Some(25), Some(-1)).is_err());
    }
}
