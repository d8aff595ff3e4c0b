use actix_web::{web, HttpRequest, HttpResponse};
use bcrypt::{hash, DEFAULT_COST};
use uuid::Uuid;

use crate::database::models::{actions, UpdateUserInput, UserResponse};
use crate::database::repositories::{RoleRepository, UserRepository};
use crate::error::{AppError, ValidationErrors};
use crate::handlers::shared::MessageResponse;
use crate::services::{ActivityLogger, AuthedUser};
use crate::validation::taken;

pub async fn show(
    _authed: AuthedUser,
    users: web::Data<UserRepository>,
    roles: web::Data<RoleRepository>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let user = users
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let role_names = roles.names_for_user(user.id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from_user(user, role_names)))
}

/// Merge the provided fields into the profile. Uniqueness checks skip the
/// user's own row so re-submitting an unchanged email stays valid.
pub async fn update(
    req: HttpRequest,
    authed: AuthedUser,
    users: web::Data<UserRepository>,
    roles: web::Data<RoleRepository>,
    logger: web::Data<ActivityLogger>,
    id: web::Path<Uuid>,
    input: web::Json<UpdateUserInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    let mut user = users
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if let Some(email) = &input.email {
        if users.email_exists(email, Some(user.id)).await? {
            return Err(ValidationErrors::single("email", taken("email")));
        }
    }
    if let Some(username) = &input.username {
        if users.username_exists(username, Some(user.id)).await? {
            return Err(ValidationErrors::single("username", taken("username")));
        }
    }

    if let Some(first_name) = input.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = input.last_name {
        user.last_name = last_name;
    }
    if let Some(username) = input.username {
        user.username = Some(username);
    }
    if let Some(email) = input.email {
        user.email = email;
    }
    if let Some(password) = input.password {
        user.password =
            hash(&password, DEFAULT_COST).map_err(|e| AppError::Internal(e.to_string()))?;
    }
    if let Some(phone) = input.phone {
        user.phone = Some(phone);
    }
    if let Some(locale) = input.locale {
        user.locale = locale;
    }
    if let Some(status) = input.status {
        user.status = status;
    }

    users.update(&user).await?;
    logger
        .log(
            Some(authed.user_id()),
            actions::UPDATE,
            format!("Updated user {}", user.id),
            &req,
        )
        .await;

    let role_names = roles.names_for_user(user.id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from_user(user, role_names)))
}

pub async fn destroy(
    req: HttpRequest,
    authed: AuthedUser,
    users: web::Data<UserRepository>,
    logger: web::Data<ActivityLogger>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let deleted = users.delete(*id).await?;
    if !deleted {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    logger
        .log(
            Some(authed.user_id()),
            actions::DELETE,
            format!("Deleted user {}", id),
            &req,
        )
        .await;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}
