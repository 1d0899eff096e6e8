use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::tournaments::TournamentService;
use crate::middleware::auth::Claims;
use crate::models::tournament::{
    CreateTournamentRequest, RegisterTeamRequest, UpdateTournamentRequest,
};

/// Create a new tournament
#[tracing::instrument(
    name = "Create tournament",
    skip(request, pool, claims),
    fields(
        tournament_name = %request.name,
        admin_user = %claims.username
    )
)]
pub async fn create_tournament(
    request: web::Json<CreateTournamentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let tournament_service = TournamentService::new(pool.get_ref().clone());

    match tournament_service.create_tournament(request.into_inner()).await {
        Ok(tournament) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": tournament
        }))),
        Err(e) => {
            tracing::error!("Failed to create tournament: {}", e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to create tournament: {}", e)
            })))
        }
    }
}

/// Update tournament details
#[tracing::instrument(
    name = "Update tournament",
    skip(path, request, pool, claims),
    fields(
        tournament_id = %path,
        admin_user = %claims.username
    )
)]
pub async fn update_tournament(
    path: web::Path<Uuid>,
    request: web::Json<UpdateTournamentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    let tournament_service = TournamentService::new(pool.get_ref().clone());

    match tournament_service
        .update_tournament(tournament_id, request.into_inner())
        .await
    {
        Ok(tournament) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tournament
        }))),
        Err(sqlx::Error::RowNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Tournament not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to update tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to update tournament: {}", e)
            })))
        }
    }
}

/// Register a team into a tournament
#[tracing::instrument(
    name = "Register team in tournament",
    skip(path, request, pool, claims),
    fields(
        tournament_id = %path,
        team_id = %request.team_id,
        admin_user = %claims.username
    )
)]
pub async fn register_team(
    path: web::Path<Uuid>,
    request: web::Json<RegisterTeamRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    let tournament_service = TournamentService::new(pool.get_ref().clone());

    match tournament_service
        .register_team(tournament_id, request.team_id)
        .await
    {
        Ok(()) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "message": "Team registered in tournament"
        }))),
        Err(sqlx::Error::RowNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Team not found"
        }))),
        Err(e) => {
            tracing::error!(
                "Failed to register team {} in tournament {}: {}",
                request.team_id,
                tournament_id,
                e
            );
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to register team: {}", e)
            })))
        }
    }
}

/// Remove a team from a tournament
#[tracing::instrument(
    name = "Remove team from tournament",
    skip(path, pool, claims),
    fields(
        admin_user = %claims.username
    )
)]
pub async fn remove_team(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let (tournament_id, team_id) = path.into_inner();
    let tournament_service = TournamentService::new(pool.get_ref().clone());

    match tournament_service.remove_team(tournament_id, team_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Team removed from tournament"
        }))),
        Err(sqlx::Error::RowNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Team is not registered in this tournament"
        }))),
        Err(e) => {
            tracing::error!(
                "Failed to remove team {} from tournament {}: {}",
                team_id,
                tournament_id,
                e
            );
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to remove team: {}", e)
            })))
        }
    }
}
