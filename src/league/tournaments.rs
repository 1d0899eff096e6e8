use sqlx::PgPool;
use uuid::Uuid;

use crate::league::standings::StandingsService;
use crate::league::validation::LeagueValidator;
use crate::models::team::Team;
use crate::models::tournament::{CreateTournamentRequest, Tournament, UpdateTournamentRequest};

/// Service responsible for tournament lifecycle and team registration
pub struct TournamentService {
    pool: PgPool,
    standings: StandingsService,
    validator: LeagueValidator,
}

impl TournamentService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: pool.clone(),
            standings: StandingsService::new(pool),
            validator: LeagueValidator::new(),
        }
    }

    /// Create a new tournament
    pub async fn create_tournament(
        &self,
        request: CreateTournamentRequest,
    ) -> Result<Tournament, sqlx::Error> {
        self.validator.validate_create_tournament_request(&request)?;

        let tournament = sqlx::query_as::<_, Tournament>(
            r#"
            INSERT INTO tournaments (name, description, season, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(self.validator.sanitize_string_input(&request.name))
        .bind(request.description)
        .bind(request.season)
        .bind(request.start_date)
        .bind(request.end_date)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Created tournament '{}' ({}) running from {} to {}",
            tournament.name,
            tournament.season,
            tournament.start_date,
            tournament.end_date
        );

        Ok(tournament)
    }

    /// Get a tournament by ID
    pub async fn get_tournament(&self, tournament_id: Uuid) -> Result<Option<Tournament>, sqlx::Error> {
        sqlx::query_as::<_, Tournament>("SELECT * FROM tournaments WHERE id = $1")
            .bind(tournament_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Get the currently active tournament
    pub async fn get_active_tournament(&self) -> Result<Option<Tournament>, sqlx::Error> {
        sqlx::query_as::<_, Tournament>(
            "SELECT * FROM tournaments WHERE is_active = TRUE ORDER BY created_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
    }

    /// Get all tournaments, most recent first
    pub async fn get_all_tournaments(&self, limit: Option<i64>) -> Result<Vec<Tournament>, sqlx::Error> {
        let (limit, _) = self.validator.validate_pagination(limit.or(Some(50)), None)?;

        sqlx::query_as::<_, Tournament>(
            "SELECT * FROM tournaments ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Update tournament details. Activating a tournament deactivates any
    /// other active one.
    pub async fn update_tournament(
        &self,
        tournament_id: Uuid,
        request: UpdateTournamentRequest,
    ) -> Result<Tournament, sqlx::Error> {
        if let Some(name) = &request.name {
            self.validator.validate_tournament_name(name)?;
        }

        if request.is_active == Some(true) {
            sqlx::query("UPDATE tournaments SET is_active = FALSE WHERE is_active = TRUE")
                .execute(&self.pool)
                .await?;
        }

        sqlx::query_as::<_, Tournament>(
            r#"
            UPDATE tournaments
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                season = COALESCE($3, season),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(request.name)
        .bind(request.description)
        .bind(request.season)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.is_active)
        .bind(tournament_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Register a team into a tournament, creating its standings row
    pub async fn register_team(&self, tournament_id: Uuid, team_id: Uuid) -> Result<(), sqlx::Error> {
        self.validator.validate_tournament_id(tournament_id)?;
        self.validator.validate_team_id(team_id)?;

        let team_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await?;

        if team_exists == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        let registered: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tournament_teams WHERE tournament_id = $1",
        )
        .bind(tournament_id)
        .fetch_one(&self.pool)
        .await?;

        self.standings
            .initialize_for_tournament(tournament_id, &[team_id])
            .await?;

        // New teams start at the bottom of the table until the next re-rank
        sqlx::query(
            r#"
            UPDATE tournament_teams
            SET position = $1
            WHERE tournament_id = $2 AND team_id = $3 AND matches_played = 0
            "#,
        )
        .bind((registered + 1) as i32)
        .bind(tournament_id)
        .bind(team_id)
        .execute(&self.pool)
        .await?;

        tracing::info!("Registered team {} in tournament {}", team_id, tournament_id);
        Ok(())
    }

    /// Remove a team from a tournament. Refused once the team has played.
    pub async fn remove_team(&self, tournament_id: Uuid, team_id: Uuid) -> Result<(), sqlx::Error> {
        let standing = self.standings.get_team_standing(tournament_id, team_id).await?;

        match standing {
            None => Err(sqlx::Error::RowNotFound),
            Some(standing) if standing.matches_played > 0 => Err(sqlx::Error::Protocol(
                "Cannot remove a team that has already played matches".into(),
            )),
            Some(_) => {
                sqlx::query(
                    "DELETE FROM tournament_teams WHERE tournament_id = $1 AND team_id = $2",
                )
                .bind(tournament_id)
                .bind(team_id)
                .execute(&self.pool)
                .await?;

                tracing::info!("Removed team {} from tournament {}", team_id, tournament_id);
                Ok(())
            }
        }
    }

    /// Teams registered in a tournament, in current table order
    pub async fn get_tournament_teams(&self, tournament_id: Uuid) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            SELECT t.*
            FROM teams t
            JOIN tournament_teams ls ON ls.team_id = t.id
            WHERE ls.tournament_id = $1
            ORDER BY ls.position ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }
}
