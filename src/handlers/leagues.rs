use actix_web::{web, HttpResponse};

use crate::database::models::{
    League, LeagueInput, LeaguePointsInput, LeagueResponse, LeagueTeamInput,
};
use crate::database::repositories::{DisciplineRepository, LeagueRepository, TeamRepository};
use crate::error::{AppError, ValidationErrors};
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;
use crate::validation::invalid_reference;

async fn load_response(
    league: League,
    disciplines: &DisciplineRepository,
    leagues: &LeagueRepository,
) -> Result<LeagueResponse, AppError> {
    let discipline = disciplines.find_by_id(league.discipline_id).await?;
    let teams = leagues.standings(league.id).await?;

    Ok(LeagueResponse::from_parts(league, discipline, teams))
}

pub async fn index(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    disciplines: web::Data<DisciplineRepository>,
) -> Result<HttpResponse, AppError> {
    let mut responses = Vec::new();
    for league in leagues.all().await? {
        responses.push(load_response(league, &disciplines, &leagues).await?);
    }

    Ok(HttpResponse::Ok().json(responses))
}

pub async fn store(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    disciplines: web::Data<DisciplineRepository>,
    input: web::Json<LeagueInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    if disciplines.find_by_id(input.discipline_id).await?.is_none() {
        return Err(ValidationErrors::single(
            "discipline_id",
            invalid_reference("discipline_id"),
        ));
    }

    let league = leagues.create(&input).await?;
    let response = load_response(league, &disciplines, &leagues).await?;
    Ok(HttpResponse::Created().json(response))
}

pub async fn show(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let league = leagues
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("League not found".to_string()))?;

    let response = load_response(league, &disciplines, &leagues).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn update(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
    input: web::Json<LeagueInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    if disciplines.find_by_id(input.discipline_id).await?.is_none() {
        return Err(ValidationErrors::single(
            "discipline_id",
            invalid_reference("discipline_id"),
        ));
    }

    let league = leagues
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("League not found".to_string()))?;

    let response = load_response(league, &disciplines, &leagues).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn destroy(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !leagues.delete(*id).await? {
        return Err(AppError::NotFound("League not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("League deleted")))
}

/* ===== standings management ===== */

pub async fn add_team(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    disciplines: web::Data<DisciplineRepository>,
    teams: web::Data<TeamRepository>,
    id: web::Path<i64>,
    input: web::Json<LeagueTeamInput>,
) -> Result<HttpResponse, AppError> {
    let league = leagues
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("League not found".to_string()))?;

    if teams.find_by_id(input.team_id).await?.is_none() {
        return Err(ValidationErrors::single(
            "team_id",
            invalid_reference("team_id"),
        ));
    }

    leagues.attach_team(league.id, input.team_id).await?;
    let response = load_response(league, &disciplines, &leagues).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn remove_team(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
    input: web::Json<LeagueTeamInput>,
) -> Result<HttpResponse, AppError> {
    let league = leagues
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("League not found".to_string()))?;

    leagues.detach_team(league.id, input.team_id).await?;
    let response = load_response(league, &disciplines, &leagues).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn set_points(
    _authed: AuthedUser,
    leagues: web::Data<LeagueRepository>,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
    input: web::Json<LeaguePointsInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    let league = leagues
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("League not found".to_string()))?;

    let updated = leagues
        .set_points(league.id, input.team_id, input.points)
        .await?;
    if !updated {
        return Err(AppError::NotFound(
            "Team is not part of this league".to_string(),
        ));
    }

    let response = load_response(league, &disciplines, &leagues).await?;
    Ok(HttpResponse::Ok().json(response))
}
