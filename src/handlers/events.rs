use actix_web::{web, HttpRequest, HttpResponse};

use crate::database::models::EventInput;
use crate::database::repositories::{EventRepository, UserRepository};
use crate::error::{AppError, ValidationErrors};
use crate::forms::{read_input, FileField};
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;
use crate::storage::Storage;
use crate::validation::invalid_reference;

const FILES: &[FileField] = &[FileField::new("banner", "events")];

async fn validate_input(input: &EventInput, users: &UserRepository) -> Result<(), AppError> {
    input.validate()?;

    if users.find_by_id(input.created_by).await?.is_none() {
        return Err(ValidationErrors::single(
            "created_by",
            invalid_reference("created_by"),
        ));
    }

    Ok(())
}

pub async fn index(
    _authed: AuthedUser,
    events: web::Data<EventRepository>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(events.all().await?))
}

pub async fn store(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    events: web::Data<EventRepository>,
    users: web::Data<UserRepository>,
    storage: web::Data<Storage>,
) -> Result<HttpResponse, AppError> {
    let input: EventInput = read_input(&req, payload, FILES, &storage).await?;
    validate_input(&input, &users).await?;

    let event = events.create(&input).await?;
    Ok(HttpResponse::Created().json(event))
}

pub async fn show(
    _authed: AuthedUser,
    events: web::Data<EventRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let event = events
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok(HttpResponse::Ok().json(event))
}

pub async fn update(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    events: web::Data<EventRepository>,
    users: web::Data<UserRepository>,
    storage: web::Data<Storage>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let input: EventInput = read_input(&req, payload, FILES, &storage).await?;
    validate_input(&input, &users).await?;

    let event = events
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok(HttpResponse::Ok().json(event))
}

pub async fn destroy(
    _authed: AuthedUser,
    events: web::Data<EventRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !events.delete(*id).await? {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Event deleted")))
}
