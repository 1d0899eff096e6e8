use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::matches::MatchService;
use crate::models::matches::{RecentResultsQuery, UpcomingMatchesQuery};

/// Get upcoming fixtures
#[tracing::instrument(
    name = "Get upcoming matches",
    skip(query, pool),
    fields(
        query = %query
    )
)]
pub async fn get_upcoming_matches(
    query: web::Query<UpcomingMatchesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service
        .get_upcoming_matches(query.tournament_id, query.limit)
        .await
    {
        Ok(matches) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": matches,
            "total_count": matches.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to get upcoming matches: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve upcoming matches"
            })))
        }
    }
}

/// Get recent results
#[tracing::instrument(
    name = "Get recent results",
    skip(query, pool),
    fields(
        query = %query
    )
)]
pub async fn get_recent_results(
    query: web::Query<RecentResultsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service
        .get_recent_results(query.tournament_id, query.limit)
        .await
    {
        Ok(matches) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": matches,
            "total_count": matches.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to get recent results: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve recent results"
            })))
        }
    }
}

/// Get fixtures for a specific matchday
pub async fn get_matchday(
    tournament_id: Uuid,
    matchday: i32,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.get_matchday(tournament_id, matchday).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": matches,
            "matchday": matchday
        }))),
        Err(e) => {
            tracing::error!(
                "Failed to get matchday {} for tournament {}: {}",
                matchday,
                tournament_id,
                e
            );
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Matchday not found"
            })))
        }
    }
}

/// Get a single match
pub async fn get_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.get_match(match_id).await {
        Ok(Some(fixture)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": fixture
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Match not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve match"
            })))
        }
    }
}

/// Get a team's match history with per-match outcomes
pub async fn get_team_match_history(
    team_id: Uuid,
    limit: Option<i64>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.get_team_match_history(team_id, limit).await {
        Ok(history) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": history,
            "total_count": history.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to get match history for team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve match history"
            })))
        }
    }
}
