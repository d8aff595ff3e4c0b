use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use super::common::Localized;
use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Page {
    pub id: i64,
    pub slug: String,
    pub title: Json<Localized>,
    pub content: Json<Localized>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInput {
    pub slug: String,
    pub title: Localized,
    pub content: Localized,
}

impl PageInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .required("slug", &self.slug)
            .max_len("slug", &self.slug, 150)
            .localized("title", &self.title)
            .localized("content", &self.content)
            .finish()
    }
}
