use actix_web::{web, HttpRequest, HttpResponse};

use crate::database::models::{Team, TeamInput, TeamMemberInput, TeamResponse, TeamStaffInput};
use crate::database::repositories::{
    DisciplineRepository, StaffRoleRepository, TeamRepository, UserRepository,
};
use crate::error::{AppError, ValidationErrors};
use crate::forms::{read_input, FileField};
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;
use crate::storage::Storage;
use crate::validation::{invalid_reference, taken};

const FILES: &[FileField] = &[FileField::new("logo", "teams")];

async fn load_response(
    team: Team,
    disciplines: &DisciplineRepository,
    teams: &TeamRepository,
) -> Result<TeamResponse, AppError> {
    let discipline = disciplines.find_by_id(team.discipline_id).await?;
    let players = teams.player_ids(team.id).await?;
    let staff = teams.staff_ids(team.id).await?;

    Ok(TeamResponse::from_parts(team, discipline, players, staff))
}

async fn validate_input(
    input: &TeamInput,
    disciplines: &DisciplineRepository,
    teams: &TeamRepository,
    exclude_id: Option<i64>,
) -> Result<(), AppError> {
    input.validate()?;

    if disciplines.find_by_id(input.discipline_id).await?.is_none() {
        return Err(ValidationErrors::single(
            "discipline_id",
            invalid_reference("discipline_id"),
        ));
    }
    if teams.tag_exists(&input.tag, exclude_id).await? {
        return Err(ValidationErrors::single("tag", taken("tag")));
    }

    Ok(())
}

pub async fn index(
    _authed: AuthedUser,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
) -> Result<HttpResponse, AppError> {
    let mut responses = Vec::new();
    for team in teams.all().await? {
        responses.push(load_response(team, &disciplines, &teams).await?);
    }

    Ok(HttpResponse::Ok().json(responses))
}

pub async fn store(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
    storage: web::Data<Storage>,
) -> Result<HttpResponse, AppError> {
    let input: TeamInput = read_input(&req, payload, FILES, &storage).await?;
    validate_input(&input, &disciplines, &teams, None).await?;

    let team = teams.create(&input).await?;
    let response = load_response(team, &disciplines, &teams).await?;
    Ok(HttpResponse::Created().json(response))
}

pub async fn show(
    _authed: AuthedUser,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let team = teams
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    let response = load_response(team, &disciplines, &teams).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn update(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
    storage: web::Data<Storage>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let input: TeamInput = read_input(&req, payload, FILES, &storage).await?;
    validate_input(&input, &disciplines, &teams, Some(*id)).await?;

    let team = teams
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    let response = load_response(team, &disciplines, &teams).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn destroy(
    _authed: AuthedUser,
    teams: web::Data<TeamRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !teams.delete(*id).await? {
        return Err(AppError::NotFound("Team not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Team deleted")))
}

/* ===== roster management ===== */

pub async fn add_player(
    _authed: AuthedUser,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
    users: web::Data<UserRepository>,
    id: web::Path<i64>,
    input: web::Json<TeamMemberInput>,
) -> Result<HttpResponse, AppError> {
    let team = teams
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    if users.find_by_id(input.user_id).await?.is_none() {
        return Err(ValidationErrors::single(
            "user_id",
            invalid_reference("user_id"),
        ));
    }

    teams.attach_player(team.id, input.user_id).await?;
    let response = load_response(team, &disciplines, &teams).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn remove_player(
    _authed: AuthedUser,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
    input: web::Json<TeamMemberInput>,
) -> Result<HttpResponse, AppError> {
    let team = teams
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    teams.detach_player(team.id, input.user_id).await?;
    let response = load_response(team, &disciplines, &teams).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn add_staff(
    _authed: AuthedUser,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
    users: web::Data<UserRepository>,
    staff_roles: web::Data<StaffRoleRepository>,
    id: web::Path<i64>,
    input: web::Json<TeamStaffInput>,
) -> Result<HttpResponse, AppError> {
    let team = teams
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    if users.find_by_id(input.user_id).await?.is_none() {
        return Err(ValidationErrors::single(
            "user_id",
            invalid_reference("user_id"),
        ));
    }
    if let Some(staff_role_id) = input.staff_role_id {
        if staff_roles.find_by_id(staff_role_id).await?.is_none() {
            return Err(ValidationErrors::single(
                "staff_role_id",
                invalid_reference("staff_role_id"),
            ));
        }
    }

    teams
        .attach_staff(team.id, input.user_id, input.staff_role_id)
        .await?;
    let response = load_response(team, &disciplines, &teams).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn remove_staff(
    _authed: AuthedUser,
    teams: web::Data<TeamRepository>,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
    input: web::Json<TeamMemberInput>,
) -> Result<HttpResponse, AppError> {
    let team = teams
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    teams.detach_staff(team.id, input.user_id).await?;
    let response = load_response(team, &disciplines, &teams).await?;
    Ok(HttpResponse::Ok().json(response))
}
