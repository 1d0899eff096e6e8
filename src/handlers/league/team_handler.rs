use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::PaginationQuery;
use crate::models::player::Player;
use crate::models::team::Team;

/// Get all teams
pub async fn get_all_teams(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(20).min(100);

    match sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name ASC LIMIT $1")
        .bind(limit)
        .fetch_all(pool.get_ref())
        .await
    {
        Ok(teams) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": teams,
            "pagination": {
                "limit": limit,
                "total": teams.len()
            }
        }))),
        Err(e) => {
            tracing::error!("Failed to get teams: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve teams"
            })))
        }
    }
}

/// Get team information
pub async fn get_team(team_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(team)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": team
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Team not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve team"
            })))
        }
    }
}

/// Get a team's roster, keepers first
pub async fn get_team_roster(team_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match sqlx::query_as::<_, Player>(
        r#"
        SELECT *
        FROM players
        WHERE team_id = $1
        ORDER BY
            CASE position
                WHEN 'goalkeeper' THEN 0
                WHEN 'defender' THEN 1
                WHEN 'midfielder' THEN 2
                ELSE 3
            END,
            shirt_number ASC NULLS LAST
        "#,
    )
    .bind(team_id)
    .fetch_all(pool.get_ref())
    .await
    {
        Ok(players) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": players,
            "total_count": players.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to get roster for team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve roster"
            })))
        }
    }
}
