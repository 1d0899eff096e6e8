use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::{ApiResponse, PaginatedResponse, PaginationInfo};
use crate::models::team::{CreateTeamRequest, Team, TeamQueryParams, TeamUpdateRequest};

// GET /admin/teams - List teams with pagination
pub async fn get_teams(
    pool: web::Data<PgPool>,
    query: web::Query<TeamQueryParams>,
) -> Result<HttpResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).min(100);
    let offset = (page - 1) * limit;

    let mut sql = "SELECT * FROM teams WHERE 1=1".to_string();
    let mut count_sql = "SELECT COUNT(*) FROM teams WHERE 1=1".to_string();

    if let Some(search) = &query.search {
        if !search.is_empty() {
            let filter = format!(" AND name ILIKE '%{}%'", search.replace('\'', "''"));
            sql.push_str(&filter);
            count_sql.push_str(&filter);
        }
    }

    sql.push_str(&format!(
        " ORDER BY created_at DESC LIMIT {} OFFSET {}",
        limit, offset
    ));

    let total_count: (i64,) = sqlx::query_as(&count_sql)
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting team count: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let teams = sqlx::query_as::<_, Team>(&sql)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting teams: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let total_pages = ((total_count.0 as f64) / (limit as f64)).ceil() as i32;

    let response = PaginatedResponse {
        data: teams,
        pagination: PaginationInfo {
            page,
            limit,
            total: total_count.0,
            total_pages,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

// GET /admin/teams/{id} - Get team by ID
pub async fn get_team_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let team = sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting team: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    match team {
        Some(team) => Ok(HttpResponse::Ok().json(ApiResponse::success("Team found", team))),
        None => Ok(HttpResponse::NotFound().json(json!({
            "error": "Team not found"
        }))),
    }
}

// POST /admin/teams - Create new team
pub async fn create_team(
    pool: web::Data<PgPool>,
    body: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse> {
    if let Err(message) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": message
        })));
    }

    let result = sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (name, short_name, crest_color, home_city, coach_name, founded_year)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(body.get_sanitized_name())
    .bind(body.short_name.trim())
    .bind(body.crest_color.clone().unwrap_or_else(|| "#1D4ED8".to_string()))
    .bind(&body.home_city)
    .bind(&body.coach_name)
    .bind(body.founded_year)
    .fetch_one(pool.get_ref())
    .await;

    match result {
        Ok(team) => {
            tracing::info!("Created team '{}' ({})", team.name, team.id);
            Ok(HttpResponse::Created().json(ApiResponse::success("Team created successfully", team)))
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(json!({
                "error": "A team with this name already exists"
            })))
        }
        Err(e) => {
            tracing::error!("Database error creating team: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create team"
            })))
        }
    }
}

// PATCH /admin/teams/{id} - Update team
pub async fn update_team(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<TeamUpdateRequest>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    if let Err(message) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": message
        })));
    }

    let result = sqlx::query_as::<_, Team>(
        r#"
        UPDATE teams
        SET name = COALESCE($1, name),
            short_name = COALESCE($2, short_name),
            crest_color = COALESCE($3, crest_color),
            home_city = COALESCE($4, home_city),
            coach_name = COALESCE($5, coach_name),
            founded_year = COALESCE($6, founded_year),
            updated_at = NOW()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&body.name)
    .bind(&body.short_name)
    .bind(&body.crest_color)
    .bind(&body.home_city)
    .bind(&body.coach_name)
    .bind(body.founded_year)
    .bind(team_id)
    .fetch_optional(pool.get_ref())
    .await;

    match result {
        Ok(Some(team)) => Ok(HttpResponse::Ok().json(ApiResponse::success("Team updated successfully", team))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Team not found"
        }))),
        Err(e) => {
            tracing::error!("Database error updating team: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update team"
            })))
        }
    }
}

// DELETE /admin/teams/{id} - Delete team
pub async fn delete_team(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    // All related data (players, standings, matches) is cascade deleted
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                tracing::info!("Deleted team {}", team_id);
                Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message(
                    "Team and all related data deleted successfully",
                )))
            } else {
                Ok(HttpResponse::NotFound().json(json!({
                    "error": "Team not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting team: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to delete team"
            })))
        }
    }
}
