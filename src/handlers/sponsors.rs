use actix_web::{web, HttpRequest, HttpResponse};

use crate::database::models::SponsorInput;
use crate::database::repositories::SponsorRepository;
use crate::error::AppError;
use crate::forms::{read_input, FileField};
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;
use crate::storage::Storage;

const FILES: &[FileField] = &[FileField::new("logo", "sponsors")];

pub async fn index(
    _authed: AuthedUser,
    sponsors: web::Data<SponsorRepository>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(sponsors.all().await?))
}

pub async fn store(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    sponsors: web::Data<SponsorRepository>,
    storage: web::Data<Storage>,
) -> Result<HttpResponse, AppError> {
    let input: SponsorInput = read_input(&req, payload, FILES, &storage).await?;
    input.validate()?;

    let sponsor = sponsors.create(&input).await?;
    Ok(HttpResponse::Created().json(sponsor))
}

pub async fn update(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    sponsors: web::Data<SponsorRepository>,
    storage: web::Data<Storage>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let input: SponsorInput = read_input(&req, payload, FILES, &storage).await?;
    input.validate()?;

    let sponsor = sponsors
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Sponsor not found".to_string()))?;

    Ok(HttpResponse::Ok().json(sponsor))
}

pub async fn destroy(
    _authed: AuthedUser,
    sponsors: web::Data<SponsorRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !sponsors.delete(*id).await? {
        return Err(AppError::NotFound("Sponsor not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Sponsor deleted")))
}
