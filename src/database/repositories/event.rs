use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::database::models::{Event, EventInput};

const EVENT_COLUMNS: &str = "id, title, description, location, start_date, end_date, banner, \
     created_by, created_at, updated_at";

#[derive(Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY start_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, input: &EventInput) -> Result<Event, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (title, description, location, start_date, end_date, banner,
                                 created_by, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(Json(&input.title))
        .bind(input.description.as_ref().map(Json))
        .bind(&input.location)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.banner)
        .bind(input.created_by)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i64, input: &EventInput) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(&format!(
            "UPDATE events
             SET title = ?, description = ?, location = ?, start_date = ?, end_date = ?,
                 banner = COALESCE(?, banner), created_by = ?, updated_at = ?
             WHERE id = ?
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(Json(&input.title))
        .bind(input.description.as_ref().map(Json))
        .bind(&input.location)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.banner)
        .bind(input.created_by)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
