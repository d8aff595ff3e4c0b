use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{ActivityLog, CreateActivityInput};

#[derive(Clone)]
pub struct ActivityRepository {
    pool: SqlitePool,
}

impl ActivityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn log(&self, input: CreateActivityInput) -> Result<ActivityLog, sqlx::Error> {
        sqlx::query_as::<_, ActivityLog>(
            "INSERT INTO activity_logs (user_id, action, description, ip_address, user_agent,
                                        created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, user_id, action, description, ip_address, user_agent, created_at",
        )
        .bind(input.user_id)
        .bind(&input.action)
        .bind(&input.description)
        .bind(&input.ip_address)
        .bind(&input.user_agent)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    pub async fn for_user(&self, user_id: Uuid) -> Result<Vec<ActivityLog>, sqlx::Error> {
        sqlx::query_as::<_, ActivityLog>(
            "SELECT id, user_id, action, description, ip_address, user_agent, created_at
             FROM activity_logs WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
