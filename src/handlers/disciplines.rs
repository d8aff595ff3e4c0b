use actix_web::{web, HttpRequest, HttpResponse};

use crate::database::models::DisciplineInput;
use crate::database::repositories::DisciplineRepository;
use crate::error::{AppError, ValidationErrors};
use crate::forms::{read_input, FileField};
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;
use crate::storage::Storage;
use crate::validation::taken;

const FILES: &[FileField] = &[FileField::new("logo", "disciplines")];

pub async fn index(
    _authed: AuthedUser,
    disciplines: web::Data<DisciplineRepository>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(disciplines.all().await?))
}

pub async fn store(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    disciplines: web::Data<DisciplineRepository>,
    storage: web::Data<Storage>,
) -> Result<HttpResponse, AppError> {
    let input: DisciplineInput = read_input(&req, payload, FILES, &storage).await?;
    input.validate()?;

    if disciplines.slug_exists(&input.slug, None).await? {
        return Err(ValidationErrors::single("slug", taken("slug")));
    }

    let discipline = disciplines.create(&input).await?;
    Ok(HttpResponse::Created().json(discipline))
}

pub async fn show(
    _authed: AuthedUser,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let discipline = disciplines
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))?;

    Ok(HttpResponse::Ok().json(discipline))
}

pub async fn update(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    disciplines: web::Data<DisciplineRepository>,
    storage: web::Data<Storage>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let input: DisciplineInput = read_input(&req, payload, FILES, &storage).await?;
    input.validate()?;

    if disciplines.slug_exists(&input.slug, Some(*id)).await? {
        return Err(ValidationErrors::single("slug", taken("slug")));
    }

    let discipline = disciplines
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))?;

    Ok(HttpResponse::Ok().json(discipline))
}

pub async fn destroy(
    _authed: AuthedUser,
    disciplines: web::Data<DisciplineRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !disciplines.delete(*id).await? {
        return Err(AppError::NotFound("Discipline not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Discipline deleted")))
}
