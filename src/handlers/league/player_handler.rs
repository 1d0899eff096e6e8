use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::matches::MatchService;
use crate::models::matches::TeamMatchRecord;
use crate::models::player::{Player, PlayerQueryParams};
use crate::models::team::Team;

#[derive(Serialize)]
pub struct PlayerProfileResponse {
    pub player: Player,
    pub team: Option<Team>,
    pub recent_team_matches: Vec<TeamMatchRecord>,
}

/// Get players with optional position, team and name filters
pub async fn get_players(
    query: web::Query<PlayerQueryParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(20).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * limit;

    let mut sql = "SELECT * FROM players WHERE 1=1".to_string();

    if let Some(position) = &query.position {
        sql.push_str(&format!(" AND position = '{}'", position.as_str()));
    }

    if let Some(team_id) = query.team_id {
        sql.push_str(&format!(" AND team_id = '{}'", team_id));
    }

    if let Some(search) = &query.search {
        if !search.is_empty() {
            sql.push_str(&format!(
                " AND full_name ILIKE '%{}%'",
                search.replace('\'', "''")
            ));
        }
    }

    sql.push_str(&format!(
        " ORDER BY full_name ASC LIMIT {} OFFSET {}",
        limit, offset
    ));

    match sqlx::query_as::<_, Player>(&sql).fetch_all(pool.get_ref()).await {
        Ok(players) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": players,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": players.len()
            }
        }))),
        Err(e) => {
            tracing::error!("Failed to get players: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve players"
            })))
        }
    }
}

/// Get a player profile: the player, their team and the team's recent
/// matches seen from that team's perspective
pub async fn get_player_profile(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let player = match sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(player)) => player,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Player not found"
            })));
        }
        Err(e) => {
            tracing::error!("Failed to get player {}: {}", player_id, e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve player"
            })));
        }
    };

    let team = match player.team_id {
        Some(team_id) => {
            match sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
                .bind(team_id)
                .fetch_optional(pool.get_ref())
                .await
            {
                Ok(team) => team,
                Err(e) => {
                    tracing::error!("Failed to get team for player {}: {}", player_id, e);
                    None
                }
            }
        }
        None => None,
    };

    let recent_team_matches = match player.team_id {
        Some(team_id) => {
            let match_service = MatchService::new(pool.get_ref().clone());
            match match_service.get_team_match_history(team_id, Some(5)).await {
                Ok(history) => history,
                Err(e) => {
                    tracing::error!("Failed to get match history for player {}: {}", player_id, e);
                    vec![]
                }
            }
        }
        None => vec![],
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": PlayerProfileResponse {
            player,
            team,
            recent_team_matches,
        }
    })))
}
