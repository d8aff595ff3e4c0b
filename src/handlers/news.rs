use actix_web::{web, HttpRequest, HttpResponse};

use crate::database::models::NewsInput;
use crate::database::repositories::{NewsRepository, UserRepository};
use crate::error::{AppError, ValidationErrors};
use crate::forms::{read_input, FileField};
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;
use crate::storage::Storage;
use crate::validation::{invalid_reference, taken};

const FILES: &[FileField] = &[FileField::new("cover_image", "news")];

async fn validate_input(
    input: &NewsInput,
    news: &NewsRepository,
    users: &UserRepository,
    exclude_id: Option<i64>,
) -> Result<(), AppError> {
    input.validate()?;

    if news.slug_exists(&input.slug, exclude_id).await? {
        return Err(ValidationErrors::single("slug", taken("slug")));
    }
    if users.find_by_id(input.author_id).await?.is_none() {
        return Err(ValidationErrors::single(
            "author_id",
            invalid_reference("author_id"),
        ));
    }

    Ok(())
}

pub async fn index(
    _authed: AuthedUser,
    news: web::Data<NewsRepository>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(news.all().await?))
}

pub async fn store(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    news: web::Data<NewsRepository>,
    users: web::Data<UserRepository>,
    storage: web::Data<Storage>,
) -> Result<HttpResponse, AppError> {
    let input: NewsInput = read_input(&req, payload, FILES, &storage).await?;
    validate_input(&input, &news, &users, None).await?;

    let article = news.create(&input).await?;
    Ok(HttpResponse::Created().json(article))
}

pub async fn show(
    _authed: AuthedUser,
    news: web::Data<NewsRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let article = news
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

    Ok(HttpResponse::Ok().json(article))
}

pub async fn update(
    _authed: AuthedUser,
    req: HttpRequest,
    payload: web::Payload,
    news: web::Data<NewsRepository>,
    users: web::Data<UserRepository>,
    storage: web::Data<Storage>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let input: NewsInput = read_input(&req, payload, FILES, &storage).await?;
    validate_input(&input, &news, &users, Some(*id)).await?;

    let article = news
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

    Ok(HttpResponse::Ok().json(article))
}

pub async fn destroy(
    _authed: AuthedUser,
    news: web::Data<NewsRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !news.delete(*id).await? {
        return Err(AppError::NotFound("News not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("News deleted")))
}
