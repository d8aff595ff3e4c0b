use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Discipline {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisciplineInput {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Public path of the uploaded logo, filled in by the upload layer.
    pub logo: Option<String>,
}

impl DisciplineInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .required("name", &self.name)
            .max_len("name", &self.name, 100)
            .required("slug", &self.slug)
            .max_len("slug", &self.slug, 120)
            .finish()
    }
}
