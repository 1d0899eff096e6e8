use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::referee::{CreateRefereeRequest, Referee, UpdateRefereeRequest};

// GET /admin/referees - List referees
pub async fn get_referees(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let referees = sqlx::query_as::<_, Referee>("SELECT * FROM referees ORDER BY full_name ASC")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting referees: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Referees found", referees)))
}

// POST /admin/referees - Create referee
pub async fn create_referee(
    pool: web::Data<PgPool>,
    body: web::Json<CreateRefereeRequest>,
) -> Result<HttpResponse> {
    if body.full_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Referee name cannot be empty"
        })));
    }

    let result = sqlx::query_as::<_, Referee>(
        r#"
        INSERT INTO referees (full_name, nationality)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(body.full_name.trim())
    .bind(&body.nationality)
    .fetch_one(pool.get_ref())
    .await;

    match result {
        Ok(referee) => {
            tracing::info!("Created referee '{}' ({})", referee.full_name, referee.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success("Referee created successfully", referee)))
        }
        Err(e) => {
            tracing::error!("Database error creating referee: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create referee"
            })))
        }
    }
}

// PATCH /admin/referees/{id} - Update referee
pub async fn update_referee(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateRefereeRequest>,
) -> Result<HttpResponse> {
    let referee_id = path.into_inner();

    let result = sqlx::query_as::<_, Referee>(
        r#"
        UPDATE referees
        SET full_name = COALESCE($1, full_name),
            nationality = COALESCE($2, nationality),
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(&body.full_name)
    .bind(&body.nationality)
    .bind(referee_id)
    .fetch_optional(pool.get_ref())
    .await;

    match result {
        Ok(Some(referee)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Referee updated successfully", referee)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Referee not found"
        }))),
        Err(e) => {
            tracing::error!("Database error updating referee: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update referee"
            })))
        }
    }
}

// DELETE /admin/referees/{id} - Delete referee
pub async fn delete_referee(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let referee_id = path.into_inner();

    let result = sqlx::query("DELETE FROM referees WHERE id = $1")
        .bind(referee_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                Ok(HttpResponse::Ok()
                    .json(ApiResponse::<()>::success_message("Referee deleted successfully")))
            } else {
                Ok(HttpResponse::NotFound().json(json!({
                    "error": "Referee not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting referee: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to delete referee"
            })))
        }
    }
}
