use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{StaffRole, StaffRoleInput};

#[derive(Clone)]
pub struct StaffRoleRepository {
    pool: SqlitePool,
}

impl StaffRoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<StaffRole>, sqlx::Error> {
        sqlx::query_as::<_, StaffRole>(
            "SELECT id, name, created_at, updated_at FROM staff_roles ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<StaffRole>, sqlx::Error> {
        sqlx::query_as::<_, StaffRole>(
            "SELECT id, name, created_at, updated_at FROM staff_roles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn create(&self, input: &StaffRoleInput) -> Result<StaffRole, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, StaffRole>(
            "INSERT INTO staff_roles (name, created_at, updated_at) VALUES (?, ?, ?)
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &StaffRoleInput,
    ) -> Result<Option<StaffRole>, sqlx::Error> {
        sqlx::query_as::<_, StaffRole>(
            "UPDATE staff_roles SET name = ?, updated_at = ? WHERE id = ?
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&input.name)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff_roles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
