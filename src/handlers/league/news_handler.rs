use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::PaginationQuery;
use crate::models::news::ArticleWithAuthor;

/// Get published news articles, newest first
pub async fn get_published_articles(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(10).min(50);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * limit;

    match sqlx::query_as::<_, ArticleWithAuthor>(
        r#"
        SELECT n.*, u.username AS author_username
        FROM news_articles n
        JOIN users u ON n.author_id = u.id
        WHERE n.published = TRUE
        ORDER BY n.published_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool.get_ref())
    .await
    {
        Ok(articles) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": articles,
            "pagination": {
                "page": page,
                "limit": limit,
                "total": articles.len()
            }
        }))),
        Err(e) => {
            tracing::error!("Failed to get news articles: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve news articles"
            })))
        }
    }
}

/// Get a single published article
pub async fn get_article(article_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match sqlx::query_as::<_, ArticleWithAuthor>(
        r#"
        SELECT n.*, u.username AS author_username
        FROM news_articles n
        JOIN users u ON n.author_id = u.id
        WHERE n.id = $1 AND n.published = TRUE
        "#,
    )
    .bind(article_id)
    .fetch_optional(pool.get_ref())
    .await
    {
        Ok(Some(article)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": article
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Article not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get article {}: {}", article_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve article"
            })))
        }
    }
}
