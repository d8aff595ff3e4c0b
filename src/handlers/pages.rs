use actix_web::{web, HttpResponse};

use crate::database::models::PageInput;
use crate::database::repositories::PageRepository;
use crate::error::{AppError, ValidationErrors};
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;
use crate::validation::taken;

pub async fn index(
    _authed: AuthedUser,
    pages: web::Data<PageRepository>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(pages.all().await?))
}

pub async fn store(
    _authed: AuthedUser,
    pages: web::Data<PageRepository>,
    input: web::Json<PageInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    if pages.slug_exists(&input.slug, None).await? {
        return Err(ValidationErrors::single("slug", taken("slug")));
    }

    let page = pages.create(&input).await?;
    Ok(HttpResponse::Created().json(page))
}

pub async fn show(
    _authed: AuthedUser,
    pages: web::Data<PageRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let page = pages
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

    Ok(HttpResponse::Ok().json(page))
}

pub async fn update(
    _authed: AuthedUser,
    pages: web::Data<PageRepository>,
    id: web::Path<i64>,
    input: web::Json<PageInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    if pages.slug_exists(&input.slug, Some(*id)).await? {
        return Err(ValidationErrors::single("slug", taken("slug")));
    }

    let page = pages
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

    Ok(HttpResponse::Ok().json(page))
}

pub async fn destroy(
    _authed: AuthedUser,
    pages: web::Data<PageRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !pages.delete(*id).await? {
        return Err(AppError::NotFound("Page not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Page deleted")))
}
