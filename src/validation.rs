//! Declarative per-field request validation.
//!
//! Each typed input implements `validate()` by running its rule set through
//! [`Rules`], which accumulates field-keyed messages and yields a
//! discriminated result. Uniqueness and foreign-key existence are checked in
//! handlers against the repositories, since they need the store.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::database::models::Localized;
use crate::error::{AppError, ValidationErrors};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

#[derive(Default)]
pub struct Rules {
    errors: ValidationErrors,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors
                .add(field, format!("The {} field is required.", field));
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.errors.add(
                field,
                format!("The {} may not be greater than {} characters.", field, max),
            );
        }
        self
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.errors.add(
                field,
                format!("The {} must be at least {} characters.", field, min),
            );
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.is_empty() && !email_regex().is_match(value) {
            self.errors
                .add(field, format!("The {} must be a valid email address.", field));
        }
        self
    }

    /// Password-confirmation style check.
    pub fn confirmed(&mut self, field: &str, value: &str, confirmation: Option<&str>) -> &mut Self {
        if confirmation != Some(value) {
            self.errors
                .add(field, format!("The {} confirmation does not match.", field));
        }
        self
    }

    /// A localized map must carry at least one translation.
    pub fn localized(&mut self, field: &str, value: &Localized) -> &mut Self {
        if value.is_empty() {
            self.errors.add(
                field,
                format!("The {} field must contain at least one translation.", field),
            );
        }
        self
    }

    pub fn after_or_equal(
        &mut self,
        field: &str,
        value: Option<DateTime<Utc>>,
        other: DateTime<Utc>,
        other_name: &str,
    ) -> &mut Self {
        if let Some(value) = value {
            if value < other {
                self.errors.add(
                    field,
                    format!(
                        "The {} must be a date after or equal to {}.",
                        field, other_name
                    ),
                );
            }
        }
        self
    }

    pub fn non_negative(&mut self, field: &str, value: i64) -> &mut Self {
        if value < 0 {
            self.errors
                .add(field, format!("The {} must be at least 0.", field));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), AppError> {
        std::mem::take(&mut self.errors).into_result()
    }
}

/// Standard message for a non-unique value.
pub fn taken(field: &str) -> String {
    format!("The {} has already been taken.", field)
}

/// Standard message for a dangling foreign key.
pub fn invalid_reference(field: &str) -> String {
    format!("The selected {} is invalid.", field)
}
