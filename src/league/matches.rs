use sqlx::PgPool;
use uuid::Uuid;

use crate::league::outcome::classify_outcome;
use crate::league::standings::StandingsService;
use crate::league::validation::LeagueValidator;
use crate::models::matches::{
    CreateMatchRequest, Match, MatchStatus, MatchWithTeams, TeamMatchRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum MatchRecordError {
    #[error("Match not found: {0}")]
    NotFound(Uuid),

    #[error("Match result has already been recorded")]
    AlreadyFinished,

    #[error("Invalid score: {0}")]
    InvalidScore(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Service responsible for fixtures and results
pub struct MatchService {
    pool: PgPool,
    standings: StandingsService,
    validator: LeagueValidator,
}

impl MatchService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: pool.clone(),
            standings: StandingsService::new(pool),
            validator: LeagueValidator::new(),
        }
    }

    /// Create a new fixture. Both teams must be registered in the tournament.
    pub async fn create_match(&self, request: CreateMatchRequest) -> Result<Match, sqlx::Error> {
        self.validator.validate_create_match_request(&request)?;

        let registered: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM tournament_teams
            WHERE tournament_id = $1 AND team_id IN ($2, $3)
            "#,
        )
        .bind(request.tournament_id)
        .bind(request.home_team_id)
        .bind(request.away_team_id)
        .fetch_one(&self.pool)
        .await?;

        if registered != 2 {
            return Err(sqlx::Error::Protocol(
                "Both teams must be registered in the tournament".into(),
            ));
        }

        let fixture = sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (
                tournament_id, home_team_id, away_team_id, referee_id,
                kickoff_time, matchday, status
            ) VALUES ($1, $2, $3, $4, $5, $6, 'scheduled')
            RETURNING *
            "#,
        )
        .bind(request.tournament_id)
        .bind(request.home_team_id)
        .bind(request.away_team_id)
        .bind(request.referee_id)
        .bind(request.kickoff_time)
        .bind(request.matchday)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Created fixture {} for tournament {} (matchday {})",
            fixture.id,
            fixture.tournament_id,
            fixture.matchday
        );

        Ok(fixture)
    }

    /// Get a single match with team display fields
    pub async fn get_match(&self, match_id: Uuid) -> Result<Option<MatchWithTeams>, sqlx::Error> {
        sqlx::query_as::<_, MatchWithTeams>(
            r#"
            SELECT m.*,
                   home.name AS home_team_name,
                   away.name AS away_team_name,
                   home.crest_color AS home_team_color,
                   away.crest_color AS away_team_color
            FROM matches m
            JOIN teams home ON m.home_team_id = home.id
            JOIN teams away ON m.away_team_id = away.id
            WHERE m.id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Upcoming fixtures, soonest kickoff first
    pub async fn get_upcoming_matches(
        &self,
        tournament_id: Option<Uuid>,
        limit: Option<i64>,
    ) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        let (limit, _) = self.validator.validate_pagination(limit, None)?;

        match tournament_id {
            Some(tournament_id) => {
                sqlx::query_as::<_, MatchWithTeams>(
                    r#"
                    SELECT m.*,
                           home.name AS home_team_name,
                           away.name AS away_team_name,
                           home.crest_color AS home_team_color,
                           away.crest_color AS away_team_color
                    FROM matches m
                    JOIN teams home ON m.home_team_id = home.id
                    JOIN teams away ON m.away_team_id = away.id
                    WHERE m.status = 'scheduled' AND m.tournament_id = $1
                    ORDER BY m.kickoff_time ASC
                    LIMIT $2
                    "#,
                )
                .bind(tournament_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, MatchWithTeams>(
                    r#"
                    SELECT m.*,
                           home.name AS home_team_name,
                           away.name AS away_team_name,
                           home.crest_color AS home_team_color,
                           away.crest_color AS away_team_color
                    FROM matches m
                    JOIN teams home ON m.home_team_id = home.id
                    JOIN teams away ON m.away_team_id = away.id
                    WHERE m.status = 'scheduled'
                    ORDER BY m.kickoff_time ASC
                    LIMIT $1
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Finished matches, most recent kickoff first
    pub async fn get_recent_results(
        &self,
        tournament_id: Option<Uuid>,
        limit: Option<i64>,
    ) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        let (limit, _) = self.validator.validate_pagination(limit, None)?;

        match tournament_id {
            Some(tournament_id) => {
                sqlx::query_as::<_, MatchWithTeams>(
                    r#"
                    SELECT m.*,
                           home.name AS home_team_name,
                           away.name AS away_team_name,
                           home.crest_color AS home_team_color,
                           away.crest_color AS away_team_color
                    FROM matches m
                    JOIN teams home ON m.home_team_id = home.id
                    JOIN teams away ON m.away_team_id = away.id
                    WHERE m.status = 'finished' AND m.tournament_id = $1
                    ORDER BY m.kickoff_time DESC
                    LIMIT $2
                    "#,
                )
                .bind(tournament_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, MatchWithTeams>(
                    r#"
                    SELECT m.*,
                           home.name AS home_team_name,
                           away.name AS away_team_name,
                           home.crest_color AS home_team_color,
                           away.crest_color AS away_team_color
                    FROM matches m
                    JOIN teams home ON m.home_team_id = home.id
                    JOIN teams away ON m.away_team_id = away.id
                    WHERE m.status = 'finished'
                    ORDER BY m.kickoff_time DESC
                    LIMIT $1
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// All fixtures of one matchday
    pub async fn get_matchday(
        &self,
        tournament_id: Uuid,
        matchday: i32,
    ) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        self.validator.validate_matchday(matchday)?;

        sqlx::query_as::<_, MatchWithTeams>(
            r#"
            SELECT m.*,
                   home.name AS home_team_name,
                   away.name AS away_team_name,
                   home.crest_color AS home_team_color,
                   away.crest_color AS away_team_color
            FROM matches m
            JOIN teams home ON m.home_team_id = home.id
            JOIN teams away ON m.away_team_id = away.id
            WHERE m.tournament_id = $1 AND m.matchday = $2
            ORDER BY m.kickoff_time ASC
            "#,
        )
        .bind(tournament_id)
        .bind(matchday)
        .fetch_all(&self.pool)
        .await
    }

    /// Record a final score. Marks the match finished, folds the result into
    /// both standings rows and re-ranks the table, all in one transaction.
    pub async fn record_result(
        &self,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), MatchRecordError> {
        self.validator
            .validate_match_scores(home_score, away_score)
            .map_err(|e| MatchRecordError::InvalidScore(e.to_string()))?;

        let fixture = sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MatchRecordError::NotFound(match_id))?;

        if fixture.status == MatchStatus::Finished {
            return Err(MatchRecordError::AlreadyFinished);
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE matches
            SET status = 'finished', home_score = $1, away_score = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(home_score)
        .bind(away_score)
        .bind(match_id)
        .execute(&mut *tx)
        .await?;

        self.standings
            .apply_result_in_tx(&mut tx, fixture.tournament_id, fixture.home_team_id, home_score, away_score)
            .await?;
        self.standings
            .apply_result_in_tx(&mut tx, fixture.tournament_id, fixture.away_team_id, away_score, home_score)
            .await?;

        self.standings
            .recalculate_positions_in_tx(&mut tx, fixture.tournament_id)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Recorded result for match {}: {} - {}",
            match_id,
            home_score,
            away_score
        );

        Ok(())
    }

    /// A team's finished matches, each classified from that team's perspective
    pub async fn get_team_match_history(
        &self,
        team_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<TeamMatchRecord>, sqlx::Error> {
        self.validator.validate_team_id(team_id)?;
        let (limit, _) = self.validator.validate_pagination(limit.or(Some(20)), None)?;

        let rows = sqlx::query_as::<_, MatchWithTeams>(
            r#"
            SELECT m.*,
                   home.name AS home_team_name,
                   away.name AS away_team_name,
                   home.crest_color AS home_team_color,
                   away.crest_color AS away_team_color
            FROM matches m
            JOIN teams home ON m.home_team_id = home.id
            JOIN teams away ON m.away_team_id = away.id
            WHERE m.status = 'finished'
              AND (m.home_team_id = $1 OR m.away_team_id = $1)
            ORDER BY m.kickoff_time DESC
            LIMIT $2
            "#,
        )
        .bind(team_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let history = rows
            .into_iter()
            .map(|row| {
                let was_home = row.fixture.home_team_id == team_id;
                let outcome =
                    classify_outcome(row.fixture.home_score, row.fixture.away_score, was_home);
                let (opponent_id, opponent_name) = if was_home {
                    (row.fixture.away_team_id, row.away_team_name)
                } else {
                    (row.fixture.home_team_id, row.home_team_name)
                };
                TeamMatchRecord {
                    match_id: row.fixture.id,
                    tournament_id: row.fixture.tournament_id,
                    kickoff_time: row.fixture.kickoff_time,
                    matchday: row.fixture.matchday,
                    status: row.fixture.status,
                    was_home,
                    opponent_id,
                    opponent_name,
                    category: outcome.category(),
                    outcome,
                }
            })
            .collect();

        Ok(history)
    }
}
