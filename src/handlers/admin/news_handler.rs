use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::news::{CreateArticleRequest, NewsArticle, UpdateArticleRequest};

// GET /admin/news - List all articles, drafts included
pub async fn get_articles(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let articles = sqlx::query_as::<_, NewsArticle>(
        "SELECT * FROM news_articles ORDER BY created_at DESC",
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting articles: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Articles found", articles)))
}

// POST /admin/news - Create article
#[tracing::instrument(
    name = "Create news article",
    skip(pool, body, claims),
    fields(
        author = %claims.username
    )
)]
pub async fn create_article(
    pool: web::Data<PgPool>,
    body: web::Json<CreateArticleRequest>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if let Err(message) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": message
        })));
    }

    let author_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let published = body.published.unwrap_or(false);

    let result = sqlx::query_as::<_, NewsArticle>(
        r#"
        INSERT INTO news_articles (author_id, title, body, cover_image_url, published, published_at)
        VALUES ($1, $2, $3, $4, $5, CASE WHEN $5 THEN NOW() ELSE NULL END)
        RETURNING *
        "#,
    )
    .bind(author_id)
    .bind(body.title.trim())
    .bind(&body.body)
    .bind(&body.cover_image_url)
    .bind(published)
    .fetch_one(pool.get_ref())
    .await;

    match result {
        Ok(article) => {
            tracing::info!("Created article '{}' ({})", article.title, article.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success("Article created successfully", article)))
        }
        Err(e) => {
            tracing::error!("Database error creating article: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to create article"
            })))
        }
    }
}

// PATCH /admin/news/{id} - Update article. Publishing stamps published_at.
pub async fn update_article(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateArticleRequest>,
) -> Result<HttpResponse> {
    let article_id = path.into_inner();

    let result = sqlx::query_as::<_, NewsArticle>(
        r#"
        UPDATE news_articles
        SET title = COALESCE($1, title),
            body = COALESCE($2, body),
            cover_image_url = COALESCE($3, cover_image_url),
            published = COALESCE($4, published),
            published_at = CASE
                WHEN $4 = TRUE AND published_at IS NULL THEN NOW()
                ELSE published_at
            END,
            updated_at = NOW()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&body.title)
    .bind(&body.body)
    .bind(&body.cover_image_url)
    .bind(body.published)
    .bind(article_id)
    .fetch_optional(pool.get_ref())
    .await;

    match result {
        Ok(Some(article)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Article updated successfully", article)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Article not found"
        }))),
        Err(e) => {
            tracing::error!("Database error updating article: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to update article"
            })))
        }
    }
}

// DELETE /admin/news/{id} - Delete article
pub async fn delete_article(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let article_id = path.into_inner();

    let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
        .bind(article_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                Ok(HttpResponse::Ok()
                    .json(ApiResponse::<()>::success_message("Article deleted successfully")))
            } else {
                Ok(HttpResponse::NotFound().json(json!({
                    "error": "Article not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting article: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "Failed to delete article"
            })))
        }
    }
}
