use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::league::outcome::classify_outcome;
use crate::league::ranking::rank_standings;
use crate::models::matches::Match;
use crate::models::standings::{StandingWithTeam, StandingsResponse, TeamStanding};
use crate::models::tournament::Tournament;

/// How many results make up the displayed form string
const FORM_LENGTH: usize = 5;

/// A standings row joined with its team's display fields
#[derive(Debug, sqlx::FromRow)]
struct StandingRow {
    #[sqlx(flatten)]
    standing: TeamStanding,
    team_name: String,
    team_color: String,
}

/// Service responsible for managing tournament standings
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Initialize standings rows for the teams of a new tournament
    pub async fn initialize_for_tournament(
        &self,
        tournament_id: Uuid,
        team_ids: &[Uuid],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        for (position, team_id) in team_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO tournament_teams (tournament_id, team_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (tournament_id, team_id) DO NOTHING
                "#,
            )
            .bind(tournament_id)
            .bind(team_id)
            .bind((position + 1) as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!(
            "Initialized standings for tournament {} with {} teams",
            tournament_id,
            team_ids.len()
        );
        Ok(())
    }

    /// Fold one final score into a team's standings row. Creates the row if
    /// the team has no standings entry yet.
    pub async fn apply_result_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tournament_id: Uuid,
        team_id: Uuid,
        scored: i32,
        conceded: i32,
    ) -> Result<(), sqlx::Error> {
        let (won, drawn, lost) = if scored > conceded {
            (1, 0, 0)
        } else if scored < conceded {
            (0, 0, 1)
        } else {
            (0, 1, 0)
        };
        let points = won * 3 + drawn;

        sqlx::query(
            r#"
            INSERT INTO tournament_teams (
                tournament_id, team_id, matches_played, wins, draws, losses,
                goals_for, goals_against, points, position, last_updated
            ) VALUES ($1, $2, 1, $3, $4, $5, $6, $7, $8, 1, NOW())
            ON CONFLICT (tournament_id, team_id) DO UPDATE SET
                matches_played = tournament_teams.matches_played + 1,
                wins = tournament_teams.wins + $3,
                draws = tournament_teams.draws + $4,
                losses = tournament_teams.losses + $5,
                goals_for = tournament_teams.goals_for + $6,
                goals_against = tournament_teams.goals_against + $7,
                points = tournament_teams.points + $8,
                last_updated = NOW()
            "#,
        )
        .bind(tournament_id)
        .bind(team_id)
        .bind(won)
        .bind(drawn)
        .bind(lost)
        .bind(scored)
        .bind(conceded)
        .bind(points)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Recalculate all positions from the ranked order and persist them
    pub async fn recalculate_positions_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tournament_id: Uuid,
    ) -> Result<(), sqlx::Error> {
        // Stable pre-sort only; the ranker below is authoritative
        let standings = sqlx::query_as::<_, TeamStanding>(
            r#"
            SELECT *
            FROM tournament_teams
            WHERE tournament_id = $1
            ORDER BY points DESC, wins DESC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&mut **tx)
        .await?;

        let ranked = rank_standings(standings);

        for (index, standing) in ranked.iter().enumerate() {
            sqlx::query(
                r#"
                UPDATE tournament_teams
                SET position = $1
                WHERE tournament_id = $2 AND team_id = $3
                "#,
            )
            .bind((index + 1) as i32)
            .bind(tournament_id)
            .bind(standing.team_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Get the full standings table for a tournament, ranked and with
    /// recent form for each team
    pub async fn get_tournament_standings(
        &self,
        tournament_id: Uuid,
    ) -> Result<StandingsResponse, sqlx::Error> {
        let tournament = sqlx::query_as::<_, Tournament>(
            "SELECT * FROM tournaments WHERE id = $1",
        )
        .bind(tournament_id)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, StandingRow>(
            r#"
            SELECT ls.*, t.name AS team_name, t.crest_color AS team_color
            FROM tournament_teams ls
            JOIN teams t ON ls.team_id = t.id
            WHERE ls.tournament_id = $1
            ORDER BY ls.points DESC, ls.wins DESC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await?;

        let form_by_team = self.recent_form_by_team(tournament_id).await?;

        let ranked = rank_standings(rows.iter().map(|row| row.standing.clone()).collect());

        let mut rows_by_team: HashMap<Uuid, StandingRow> = rows
            .into_iter()
            .map(|row| (row.standing.team_id, row))
            .collect();

        let standings: Vec<StandingWithTeam> = ranked
            .into_iter()
            .enumerate()
            .filter_map(|(index, mut standing)| {
                let row = rows_by_team.remove(&standing.team_id)?;
                standing.position = (index + 1) as i32;
                let goal_difference = standing.goal_difference();
                let recent_form = form_by_team
                    .get(&standing.team_id)
                    .cloned()
                    .unwrap_or_default();
                Some(StandingWithTeam {
                    standing,
                    team_name: row.team_name,
                    team_color: row.team_color,
                    goal_difference,
                    recent_form,
                })
            })
            .collect();

        let last_updated = standings
            .iter()
            .map(|s| s.standing.last_updated)
            .max()
            .unwrap_or(tournament.updated_at);

        Ok(StandingsResponse {
            tournament,
            standings,
            last_updated,
        })
    }

    /// Get the standings row for a specific team
    pub async fn get_team_standing(
        &self,
        tournament_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<TeamStanding>, sqlx::Error> {
        sqlx::query_as::<_, TeamStanding>(
            "SELECT * FROM tournament_teams WHERE tournament_id = $1 AND team_id = $2",
        )
        .bind(tournament_id)
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Classify each team's latest finished matches into W/D/L characters,
    /// most recent first
    async fn recent_form_by_team(
        &self,
        tournament_id: Uuid,
    ) -> Result<HashMap<Uuid, Vec<char>>, sqlx::Error> {
        let finished = sqlx::query_as::<_, Match>(
            r#"
            SELECT *
            FROM matches
            WHERE tournament_id = $1 AND status = 'finished'
            ORDER BY kickoff_time DESC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await?;

        let mut form: HashMap<Uuid, Vec<char>> = HashMap::new();
        for fixture in &finished {
            for (team_id, is_home) in [(fixture.home_team_id, true), (fixture.away_team_id, false)] {
                let entry = form.entry(team_id).or_default();
                if entry.len() >= FORM_LENGTH {
                    continue;
                }
                let outcome = classify_outcome(fixture.home_score, fixture.away_score, is_home);
                entry.push(outcome.result.as_char());
            }
        }

        Ok(form)
    }
}
