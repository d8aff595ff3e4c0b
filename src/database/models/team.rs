use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::discipline::Discipline;
use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub discipline_id: i64,
    pub name: String,
    pub tag: String,
    pub logo: Option<String>,
    pub wins: i64,
    pub losses: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamInput {
    pub discipline_id: i64,
    pub name: String,
    pub tag: String,
    pub logo: Option<String>,
}

impl TeamInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .required("name", &self.name)
            .max_len("name", &self.name, 100)
            .required("tag", &self.tag)
            .max_len("tag", &self.tag, 10)
            .finish()
    }
}

/// Team with its discipline and member ids loaded, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: i64,
    pub discipline: Option<Discipline>,
    pub name: String,
    pub tag: String,
    pub logo: Option<String>,
    pub wins: i64,
    pub losses: i64,
    pub players: Vec<Uuid>,
    pub staff: Vec<Uuid>,
}

impl TeamResponse {
    pub fn from_parts(
        team: Team,
        discipline: Option<Discipline>,
        players: Vec<Uuid>,
        staff: Vec<Uuid>,
    ) -> Self {
        Self {
            id: team.id,
            discipline,
            name: team.name,
            tag: team.tag,
            logo: team.logo,
            wins: team.wins,
            losses: team.losses,
            players,
            staff,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberInput {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamStaffInput {
    pub user_id: Uuid,
    pub staff_role_id: Option<i64>,
}
