use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::player::{CreatePlayerRequest, Player, UpdatePlayerRequest};

// POST /admin/players - Create new player
pub async fn create_player(
    pool: web::Data<PgPool>,
    body: web::Json<CreatePlayerRequest>,
) -> Result<HttpResponse> {
    if let Err(message) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": message
        })));
    }

    let result = sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (team_id, full_name, position, shirt_number, nationality, birth_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(body.team_id)
    .bind(body.full_name.trim())
    .bind(body.position.as_str())
    .bind(body.shirt_number)
    .bind(&body.nationality)
    .bind(body.birth_date)
    .fetch_one(pool.get_ref())
    .await;

    match result {
        Ok(player) => {
            tracing::info!("Created player '{}' ({})", player.full_name, player.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success("Player created successfully", player)))
        }
        Err(e) => {
            tracing::error!("Database error creating player: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create player"
            })))
        }
    }
}

// PATCH /admin/players/{id} - Update player
pub async fn update_player(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePlayerRequest>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    let result = sqlx::query_as::<_, Player>(
        r#"
        UPDATE players
        SET team_id = COALESCE($1, team_id),
            full_name = COALESCE($2, full_name),
            position = COALESCE($3, position),
            shirt_number = COALESCE($4, shirt_number),
            nationality = COALESCE($5, nationality),
            birth_date = COALESCE($6, birth_date),
            updated_at = NOW()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(body.team_id)
    .bind(&body.full_name)
    .bind(body.position.map(|p| p.as_str()))
    .bind(body.shirt_number)
    .bind(&body.nationality)
    .bind(body.birth_date)
    .bind(player_id)
    .fetch_optional(pool.get_ref())
    .await;

    match result {
        Ok(Some(player)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Player updated successfully", player)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Player not found"
        }))),
        Err(e) => {
            tracing::error!("Database error updating player: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update player"
            })))
        }
    }
}

// DELETE /admin/players/{id} - Delete player
pub async fn delete_player(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(player_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                tracing::info!("Deleted player {}", player_id);
                Ok(HttpResponse::Ok()
                    .json(ApiResponse::<()>::success_message("Player deleted successfully")))
            } else {
                Ok(HttpResponse::NotFound().json(json!({
                    "error": "Player not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting player: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to delete player"
            })))
        }
    }
}
