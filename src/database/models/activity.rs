use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed action tags written by the user-facing services.
pub mod actions {
    pub const REGISTER: &str = "user.register";
    pub const LOGIN: &str = "user.login";
    pub const LOGOUT: &str = "user.logout";
    pub const UPDATE: &str = "user.update";
    pub const DELETE: &str = "user.delete";
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActivityLog {
    pub id: i64,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub description: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateActivityInput {
    pub user_id: Option<Uuid>,
    pub action: String,
    pub description: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
