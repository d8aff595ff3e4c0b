use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StaffRole {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffRoleInput {
    pub name: String,
}

impl StaffRoleInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .required("name", &self.name)
            .max_len("name", &self.name, 100)
            .finish()
    }
}
