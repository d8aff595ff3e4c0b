use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Locale, UserStatus};
use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: Option<String>,
    pub email: String,
    /// bcrypt hash, never serialized.
    pub password: String,
    pub phone: Option<String>,
    pub locale: Locale,
    pub status: UserStatus,
    pub last_login_at: Option<DateTime<Utc>>,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The user shape exposed over the API. Mirrors the row minus the
/// credential, plus role names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub locale: Locale,
    pub status: UserStatus,
    pub roles: Vec<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: User, roles: Vec<String>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            phone: user.phone,
            locale: user.locale,
            status: user.status,
            roles,
            last_login: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// Profile update; every field is optional and only provided fields are
/// merged into the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub phone: Option<String>,
    pub locale: Option<Locale>,
    pub status: Option<UserStatus>,
}

impl UpdateUserInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut rules = Rules::new();
        if let Some(first_name) = &self.first_name {
            rules.required("first_name", first_name).max_len("first_name", first_name, 100);
        }
        if let Some(last_name) = &self.last_name {
            rules.required("last_name", last_name).max_len("last_name", last_name, 100);
        }
        if let Some(username) = &self.username {
            rules.max_len("username", username, 100);
        }
        if let Some(email) = &self.email {
            rules.required("email", email).email("email", email);
        }
        if let Some(password) = &self.password {
            rules.min_len("password", password, 8).confirmed(
                "password",
                password,
                self.password_confirmation.as_deref(),
            );
        }
        if let Some(phone) = &self.phone {
            rules.max_len("phone", phone, 50);
        }
        rules.finish()
    }
}
