use actix_web::{web, HttpResponse, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::common::{ApiResponse, PaginatedResponse, PaginationInfo};
use crate::models::user::{UserRole, UserStatus};

#[derive(Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct UserQueryParams {
    pub page: Option<i32>,
    pub limit: Option<i32>,
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserStatusRequest {
    pub status: UserStatus,
}

// GET /admin/users - List users with pagination
pub async fn get_users(
    pool: web::Data<PgPool>,
    query: web::Query<UserQueryParams>,
) -> Result<HttpResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).min(100);
    let offset = (page - 1) * limit;

    let mut sql = r#"
        SELECT id, username, email, role, status, created_at
        FROM users
        WHERE 1=1
    "#
    .to_string();

    let mut count_sql = "SELECT COUNT(*) FROM users WHERE 1=1".to_string();

    if let Some(search) = &query.search {
        if !search.is_empty() {
            let filter = format!(
                " AND (username ILIKE '%{}%' OR email ILIKE '%{}%')",
                search.replace('\'', "''"),
                search.replace('\'', "''")
            );
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
            tracing::error!("Database error getting user count: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let rows = sqlx::query(&sql)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting users: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let users: Vec<AdminUserResponse> = rows
        .into_iter()
        .map(|row| AdminUserResponse {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            role: row.get("role"),
            status: row.get("status"),
            created_at: row.get("created_at"),
        })
        .collect();

    let total_pages = ((total_count.0 as f64) / (limit as f64)).ceil() as i32;

    let response = PaginatedResponse {
        data: users,
        pagination: PaginationInfo {
            page,
            limit,
            total: total_count.0,
            total_pages,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

// PATCH /admin/users/{id}/status - Change a user's status
pub async fn update_user_status(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUserStatusRequest>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    let result = sqlx::query(
        "UPDATE users SET status = $1, updated_at = NOW() WHERE id = $2",
    )
    .bind(body.status.to_string())
    .bind(user_id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                tracing::info!("Updated status of user {} to {}", user_id, body.status);
                Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message(
                    "User status updated successfully",
                )))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "User not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error updating user status: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update user status"
            })))
        }
    }
}
