use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::discipline::Discipline;
use crate::error::AppError;
use crate::validation::Rules;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub discipline_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInput {
    pub name: String,
    pub description: Option<String>,
    pub discipline_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl LeagueInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new()
            .required("name", &self.name)
            .max_len("name", &self.name, 150)
            .after_or_equal("end_date", self.end_date, self.start_date, "start_date")
            .finish()
    }
}

/// One row of the league standings: the team plus its pivot points.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeagueStanding {
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub discipline: Option<Discipline>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub teams: Vec<LeagueStanding>,
    pub created_at: DateTime<Utc>,
}

impl LeagueResponse {
    pub fn from_parts(
        league: League,
        discipline: Option<Discipline>,
        teams: Vec<LeagueStanding>,
    ) -> Self {
        Self {
            id: league.id,
            name: league.name,
            description: league.description,
            discipline,
            start_date: league.start_date,
            end_date: league.end_date,
            teams,
            created_at: league.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueTeamInput {
    pub team_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaguePointsInput {
    pub team_id: i64,
    pub points: i64,
}

impl LeaguePointsInput {
    pub fn validate(&self) -> Result<(), AppError> {
        Rules::new().non_negative("points", self.points).finish()
    }
}
