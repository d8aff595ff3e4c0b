use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{League, LeagueInput, LeagueStanding};

#[derive(Clone)]
pub struct LeagueRepository {
    pool: SqlitePool,
}

impl LeagueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<League>, sqlx::Error> {
        sqlx::query_as::<_, League>(
            "SELECT id, name, description, discipline_id, start_date, end_date,
                    created_at, updated_at
             FROM leagues ORDER BY start_date DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<League>, sqlx::Error> {
        sqlx::query_as::<_, League>(
            "SELECT id, name, description, discipline_id, start_date, end_date,
                    created_at, updated_at
             FROM leagues WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn create(&self, input: &LeagueInput) -> Result<League, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, League>(
            "INSERT INTO leagues (name, description, discipline_id, start_date, end_date,
                                  created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id, name, description, discipline_id, start_date, end_date,
                       created_at, updated_at",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.discipline_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &LeagueInput,
    ) -> Result<Option<League>, sqlx::Error> {
        sqlx::query_as::<_, League>(
            "UPDATE leagues
             SET name = ?, description = ?, discipline_id = ?, start_date = ?, end_date = ?,
                 updated_at = ?
             WHERE id = ?
             RETURNING id, name, description, discipline_id, start_date, end_date,
                       created_at, updated_at",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.discipline_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leagues WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /* ===== standings (league_team pivot) ===== */

    pub async fn standings(&self, league_id: i64) -> Result<Vec<LeagueStanding>, sqlx::Error> {
        sqlx::query_as::<_, LeagueStanding>(
            "SELECT t.id, t.name, t.tag, lt.points
             FROM league_team lt
             INNER JOIN teams t ON t.id = lt.team_id
             WHERE lt.league_id = ?
             ORDER BY lt.points DESC, t.name",
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Idempotent: an existing membership keeps its points.
    pub async fn attach_team(&self, league_id: i64, team_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO league_team (league_id, team_id, points) VALUES (?, ?, 0)
             ON CONFLICT (league_id, team_id) DO NOTHING",
        )
        .bind(league_id)
        .bind(team_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn detach_team(&self, league_id: i64, team_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM league_team WHERE league_id = ? AND team_id = ?")
            .bind(league_id)
            .bind(team_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when the team is not part of the league.
    pub async fn set_points(
        &self,
        league_id: i64,
        team_id: i64,
        points: i64,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE league_team SET points = ? WHERE league_id = ? AND team_id = ?")
                .bind(points)
                .bind(league_id)
                .bind(team_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
