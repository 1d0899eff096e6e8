use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::matches::{MatchRecordError, MatchService};
use crate::middleware::auth::Claims;
use crate::models::matches::{CreateMatchRequest, MatchResultRequest};

/// Create a new fixture
#[tracing::instrument(
    name = "Create fixture",
    skip(request, pool, claims),
    fields(
        tournament_id = %request.tournament_id,
        admin_user = %claims.username
    )
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.create_match(request.into_inner()).await {
        Ok(fixture) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": fixture
        }))),
        Err(e) => {
            tracing::error!("Failed to create fixture: {}", e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to create fixture: {}", e)
            })))
        }
    }
}

/// Record a final score for a match
#[tracing::instrument(
    name = "Record match result",
    skip(path, result_request, pool, claims),
    fields(
        match_id = %path,
        admin_user = %claims.username
    )
)]
pub async fn record_match_result(
    path: web::Path<Uuid>,
    result_request: web::Json<MatchResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    tracing::info!(
        "Recording result for match {}: {} - {} by admin: {}",
        match_id,
        result_request.home_score,
        result_request.away_score,
        claims.username
    );

    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service
        .record_result(match_id, result_request.home_score, result_request.away_score)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Match result recorded successfully"
        }))),
        Err(MatchRecordError::NotFound(_)) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Match not found"
        }))),
        Err(e @ MatchRecordError::AlreadyFinished) => Ok(HttpResponse::Conflict().json(json!({
            "success": false,
            "message": e.to_string()
        }))),
        Err(e @ MatchRecordError::InvalidScore(_)) => Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": e.to_string()
        }))),
        Err(e) => {
            tracing::error!("Failed to record result for match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to record match result"
            })))
        }
    }
}
