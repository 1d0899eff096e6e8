use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::tournaments::TournamentService;
use crate::models::common::PaginationQuery;

/// Get the currently active tournament
pub async fn get_active_tournament(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let tournament_service = TournamentService::new(pool.get_ref().clone());

    match tournament_service.get_active_tournament().await {
        Ok(Some(tournament)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tournament
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "No active tournament found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get active tournament: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve active tournament"
            })))
        }
    }
}

/// Get specific tournament
pub async fn get_tournament(
    tournament_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_service = TournamentService::new(pool.get_ref().clone());

    match tournament_service.get_tournament(tournament_id).await {
        Ok(Some(tournament)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tournament
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Tournament not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve tournament"
            })))
        }
    }
}

/// Get all tournaments with pagination
pub async fn get_all_tournaments(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_service = TournamentService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(10).min(50);

    match tournament_service.get_all_tournaments(Some(limit)).await {
        Ok(tournaments) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tournaments,
            "pagination": {
                "limit": limit,
                "total": tournaments.len()
            }
        }))),
        Err(e) => {
            tracing::error!("Failed to get tournaments: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve tournaments"
            })))
        }
    }
}

/// Get teams registered in a tournament
pub async fn get_tournament_teams(
    tournament_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_service = TournamentService::new(pool.get_ref().clone());

    match tournament_service.get_tournament_teams(tournament_id).await {
        Ok(teams) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": teams
        }))),
        Err(e) => {
            tracing::error!("Failed to get teams for tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Tournament teams not found"
            })))
        }
    }
}
