use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::standings::StandingsService;

/// Get tournament standings
pub async fn get_tournament_standings(
    tournament_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let standings_service = StandingsService::new(pool.get_ref().clone());

    match standings_service.get_tournament_standings(tournament_id).await {
        Ok(standings) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": standings
        }))),
        Err(e) => {
            tracing::error!("Failed to get standings for tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Standings not found"
            })))
        }
    }
}
