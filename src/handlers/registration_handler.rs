use actix_web::{web, HttpResponse};
use chrono::Utc;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{RegistrationRequest, UserRole, UserStatus};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match insert_user(&user_form, &pool).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            HttpResponse::Conflict().finish()
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn insert_user(
    user_form: &web::Json<RegistrationRequest>,
    pool: &PgPool,
) -> Result<(), sqlx::Error> {
    let user_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, email, role, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(user_id)
    .bind(&user_form.username)
    .bind(hash_password(user_form.password.expose_secret()))
    .bind(&user_form.email)
    .bind(UserRole::User.to_string())
    .bind(UserStatus::Active.to_string())
    .bind(Utc::now())
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;

    Ok(())
}
