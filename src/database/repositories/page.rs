use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::database::models::{Page, PageInput};

const PAGE_COLUMNS: &str = "id, slug, title, content, created_at, updated_at";

#[derive(Clone)]
pub struct PageRepository {
    pool: SqlitePool,
}

impl PageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Page>, sqlx::Error> {
        sqlx::query_as::<_, Page>(&format!("SELECT {PAGE_COLUMNS} FROM pages ORDER BY slug"))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Page>, sqlx::Error> {
        sqlx::query_as::<_, Page>(&format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = ?"))
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
            "SELECT COUNT(*) FROM pages WHERE slug = ? AND id != COALESCE(?, -1)",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, input: &PageInput) -> Result<Page, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Page>(&format!(
            "INSERT INTO pages (slug, title, content, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {PAGE_COLUMNS}"
        ))
        .bind(&input.slug)
        .bind(Json(&input.title))
        .bind(Json(&input.content))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i64, input: &PageInput) -> Result<Option<Page>, sqlx::Error> {
        sqlx::query_as::<_, Page>(&format!(
            "UPDATE pages SET slug = ?, title = ?, content = ?, updated_at = ?
             WHERE id = ?
             RETURNING {PAGE_COLUMNS}"
        ))
        .bind(&input.slug)
        .bind(Json(&input.title))
        .bind(Json(&input.content))
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
