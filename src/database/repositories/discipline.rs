use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Discipline, DisciplineInput};

#[derive(Clone)]
pub struct DisciplineRepository {
    pool: SqlitePool,
}

impl DisciplineRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Discipline>, sqlx::Error> {
        sqlx::query_as::<_, Discipline>(
            "SELECT id, name, slug, description, logo, created_at, updated_at
             FROM disciplines ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Discipline>, sqlx::Error> {
        sqlx::query_as::<_, Discipline>(
            "SELECT id, name, slug, description, logo, created_at, updated_at
             FROM disciplines WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Uniqueness probe; `exclude_id` skips the row being updated.
    pub async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM disciplines WHERE slug = ? AND id != COALESCE(?, -1)",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, input: &DisciplineInput) -> Result<Discipline, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Discipline>(
            "INSERT INTO disciplines (name, slug, description, logo, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, name, slug, description, logo, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.logo)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &DisciplineInput,
    ) -> Result<Option<Discipline>, sqlx::Error> {
        sqlx::query_as::<_, Discipline>(
            "UPDATE disciplines
             SET name = ?, slug = ?, description = ?, logo = COALESCE(?, logo), updated_at = ?
             WHERE id = ?
             RETURNING id, name, slug, description, logo, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.logo)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disciplines WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
