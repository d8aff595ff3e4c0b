use serde::{Deserialize, Serialize};

use super::common::Locale;
use super::user::UserResponse;
use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: Option<String>,
    pub locale: Option<Locale>,
}

impl RegisterInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .required("first_name", &self.first_name)
            .max_len("first_name", &self.first_name, 100)
            .required("last_name", &self.last_name)
            .max_len("last_name", &self.last_name, 100)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("password", &self.password)
            .min_len("password", &self.password, 8)
            .confirmed(
                "password",
                &self.password,
                self.password_confirmation.as_deref(),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordInput {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordInput {
    pub token: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: Option<String>,
}

impl ResetPasswordInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .required("token", &self.token)
            .required("email", &self.email)
            .email("email", &self.email)
            .required("password", &self.password)
            .min_len("password", &self.password, 8)
            .confirmed(
                "password",
                &self.password,
                self.password_confirmation.as_deref(),
            )
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}
