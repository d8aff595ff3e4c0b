use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Team, TeamInput};

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            "SELECT id, discipline_id, name, tag, logo, wins, losses, created_at, updated_at
             FROM teams ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            "SELECT id, discipline_id, name, tag, logo, wins, losses, created_at, updated_at
             FROM teams WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn tag_exists(
        &self,
        tag: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM teams WHERE tag = ? AND id != COALESCE(?, -1)",
        )
        .bind(tag)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, input: &TeamInput) -> Result<Team, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Team>(
            "INSERT INTO teams (discipline_id, name, tag, logo, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, discipline_id, name, tag, logo, wins, losses, created_at, updated_at",
        )
        .bind(input.discipline_id)
        .bind(&input.name)
        .bind(&input.tag)
        .bind(&input.logo)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i64, input: &TeamInput) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            "UPDATE teams
             SET discipline_id = ?, name = ?, tag = ?, logo = COALESCE(?, logo), updated_at = ?
             WHERE id = ?
             RETURNING id, discipline_id, name, tag, logo, wins, losses, created_at, updated_at",
        )
        .bind(input.discipline_id)
        .bind(&input.name)
        .bind(&input.tag)
        .bind(&input.logo)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /* ===== player & staff membership ===== */

    pub async fn player_ids(&self, team_id: i64) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar("SELECT user_id FROM team_user WHERE team_id = ? ORDER BY joined_at")
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn staff_ids(&self, team_id: i64) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar("SELECT user_id FROM team_staff WHERE team_id = ? ORDER BY assigned_at")
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Idempotent: re-attaching an existing player is a no-op.
    pub async fn attach_player(&self, team_id: i64, user_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO team_user (team_id, user_id, joined_at) VALUES (?, ?, ?)
             ON CONFLICT (team_id, user_id) DO NOTHING",
        )
        .bind(team_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn detach_player(&self, team_id: i64, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_user WHERE team_id = ? AND user_id = ?")
            .bind(team_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Re-attaching existing staff updates their role rather than
    /// duplicating the membership.
    pub async fn attach_staff(
        &self,
        team_id: i64,
        user_id: Uuid,
        staff_role_id: Option<i64>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO team_staff (team_id, user_id, staff_role_id, assigned_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT (team_id, user_id) DO UPDATE SET staff_role_id = excluded.staff_role_id",
        )
        .bind(team_id)
        .bind(user_id)
        .bind(staff_role_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn detach_staff(&self, team_id: i64, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_staff WHERE team_id = ? AND user_id = ?")
            .bind(team_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
