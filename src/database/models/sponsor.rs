use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sponsor {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SponsorInput {
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
}

impl SponsorInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut rules = Rules::new();
        rules.required("name", &self.name).max_len("name", &self.name, 150);
        if let Some(website) = &self.website {
            rules.max_len("website", website, 255);
        }
        rules.finish()
    }
}
