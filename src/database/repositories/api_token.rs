use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::ApiToken;

#[derive(Clone)]
pub struct ApiTokenRepository {
    pool: SqlitePool,
}

impl ApiTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, token_hash: &str) -> Result<ApiToken, sqlx::Error> {
        sqlx::query_as::<_, ApiToken>(
            "INSERT INTO api_tokens (user_id, token_hash, created_at) VALUES (?, ?, ?)
             RETURNING id, user_id, token_hash, created_at, last_used_at",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_by_hash(&self, token_hash: &str) -> Result<Option<ApiToken>, sqlx::Error> {
        sqlx::query_as::<_, ApiToken>(
            "SELECT id, user_id, token_hash, created_at, last_used_at
             FROM api_tokens WHERE token_hash = ?",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn touch(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE api_tokens SET last_used_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Revoke a single session; other tokens for the same user stay valid.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM api_tokens WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
