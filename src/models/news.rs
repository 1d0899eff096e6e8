// src/models/news.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Article with author info for public display
#[derive(Debug, FromRow, Serialize)]
pub struct ArticleWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub article: NewsArticle,
    pub author_username: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub cover_image_url: Option<String>,
    pub published: Option<bool>,
}

impl CreateArticleRequest {
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Article title cannot be empty".to_string());
        }

        if title.len() > 255 {
            return Err("Article title cannot exceed 255 characters".to_string());
        }

        if self.body.trim().is_empty() {
            return Err("Article body cannot be empty".to_string());
        }

        Ok(())
    }
}
