use actix_web::{web, HttpResponse};

use crate::database::models::StaffRoleInput;
use crate::database::repositories::StaffRoleRepository;
use crate::error::AppError;
use crate::handlers::shared::MessageResponse;
use crate::services::AuthedUser;

pub async fn index(
    _authed: AuthedUser,
    staff_roles: web::Data<StaffRoleRepository>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(staff_roles.all().await?))
}

pub async fn store(
    _authed: AuthedUser,
    staff_roles: web::Data<StaffRoleRepository>,
    input: web::Json<StaffRoleInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    let staff_role = staff_roles.create(&input).await?;
    Ok(HttpResponse::Created().json(staff_role))
}

pub async fn update(
    _authed: AuthedUser,
    staff_roles: web::Data<StaffRoleRepository>,
    id: web::Path<i64>,
    input: web::Json<StaffRoleInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    let staff_role = staff_roles
        .update(*id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff role not found".to_string()))?;

    Ok(HttpResponse::Ok().json(staff_role))
}

pub async fn destroy(
    _authed: AuthedUser,
    staff_roles: web::Data<StaffRoleRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if !staff_roles.delete(*id).await? {
        return Err(AppError::NotFound("Staff role not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Staff role deleted")))
}
