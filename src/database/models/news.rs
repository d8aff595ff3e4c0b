use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use super::common::Localized;
use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct News {
    pub id: i64,
    pub title: Json<Localized>,
    pub content: Json<Localized>,
    pub slug: String,
    pub cover_image: Option<String>,
    pub author_id: Uuid,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsInput {
    pub title: Localized,
    pub content: Localized,
    pub slug: String,
    pub cover_image: Option<String>,
    pub author_id: Uuid,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .localized("title", &self.title)
            .localized("content", &self.content)
            .required("slug", &self.slug)
            .max_len("slug", &self.slug, 150)
            .finish()
    }
}
