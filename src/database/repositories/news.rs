use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::database::models::{News, NewsInput};

const NEWS_COLUMNS: &str =
    "id, title, content, slug, cover_image, author_id, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct NewsRepository {
    pool: SqlitePool,
}

impl NewsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<News>, sqlx::Error> {
        sqlx::query_as::<_, News>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news ORDER BY published_at DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<News>, sqlx::Error> {
        sqlx::query_as::<_, News>(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM news WHERE slug = ? AND id != COALESCE(?, -1)",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, input: &NewsInput) -> Result<News, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, News>(&format!(
            "INSERT INTO news (title, content, slug, cover_image, author_id, published_at,
                               created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {NEWS_COLUMNS}"
        ))
        .bind(Json(&input.title))
        .bind(Json(&input.content))
        .bind(&input.slug)
        .bind(&input.cover_image)
        .bind(input.author_id)
        .bind(input.published_at)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i64, input: &NewsInput) -> Result<Option<News>, sqlx::Error> {
        sqlx::query_as::<_, News>(&format!(
            "UPDATE news
             SET title = ?, content = ?, slug = ?, cover_image = COALESCE(?, cover_image),
                 author_id = ?, published_at = ?, updated_at = ?
             WHERE id = ?
             RETURNING {NEWS_COLUMNS}"
        ))
        .bind(Json(&input.title))
        .bind(Json(&input.content))
        .bind(&input.slug)
        .bind(&input.cover_image)
        .bind(input.author_id)
        .bind(input.published_at)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
