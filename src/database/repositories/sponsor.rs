use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Sponsor, SponsorInput};

#[derive(Clone)]
pub struct SponsorRepository {
    pool: SqlitePool,
}

impl SponsorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            "SELECT id, name, logo, website, created_at, updated_at FROM sponsors ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            "SELECT id, name, logo, website, created_at, updated_at FROM sponsors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn create(&self, input: &SponsorInput) -> Result<Sponsor, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Sponsor>(
            "INSERT INTO sponsors (name, logo, website, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, name, logo, website, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(&input.logo)
        .bind(&input.website)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &SponsorInput,
    ) -> Result<Option<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            "UPDATE sponsors
             SET name = ?, logo = COALESCE(?, logo), website = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, name, logo, website, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(&input.logo)
        .bind(&input.website)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
