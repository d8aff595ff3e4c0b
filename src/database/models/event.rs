use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use super::common::Localized;
use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub title: Json<Localized>,
    pub description: Option<Json<Localized>>,
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub banner: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub title: Localized,
    pub description: Option<Localized>,
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub banner: Option<String>,
    pub created_by: Uuid,
}

impl EventInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut rules = Rules::new();
        rules.localized("title", &self.title);
        if let Some(location) = &self.location {
            rules.max_len("location", location, 255);
        }
        rules.after_or_equal(
            "end_date",
            Some(self.end_date),
            self.start_date,
            "start_date",
        );
        rules.finish()
    }
}
