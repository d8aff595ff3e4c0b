use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::Config;
use crate::database::models::{
    actions, AuthResponse, ForgotPasswordInput, LoginInput, RegisterInput, ResetPasswordInput,
    UserResponse,
};
use crate::database::repositories::RoleRepository;
use crate::error::AppError;
use crate::handlers::shared::MessageResponse;
use crate::services::{ActivityLogger, AuthService, AuthedUser};

pub async fn register(
    req: HttpRequest,
    auth: web::Data<AuthService>,
    roles: web::Data<RoleRepository>,
    logger: web::Data<ActivityLogger>,
    config: web::Data<Config>,
    input: web::Json<RegisterInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    let user = auth.register(input).await?;
    logger
        .log(Some(user.id), actions::REGISTER, "User registered", &req)
        .await;

    let verification_link = auth.verification_link(&user)?;
    if config.is_production() {
        // In production the link goes out by mail only.
        log::info!("verification link for {}: {}", user.email, verification_link);
    }

    let role_names = roles.names_for_user(user.id).await?;
    let mut body = json!({ "user": UserResponse::from_user(user, role_names) });
    if !config.is_production() {
        body["verification_link"] = json!(verification_link);
    }

    Ok(HttpResponse::Created().json(body))
}

pub async fn login(
    req: HttpRequest,
    auth: web::Data<AuthService>,
    roles: web::Data<RoleRepository>,
    logger: web::Data<ActivityLogger>,
    input: web::Json<LoginInput>,
) -> Result<HttpResponse, AppError> {
    let (token, user) = auth.login(input.into_inner()).await?;
    logger
        .log(Some(user.id), actions::LOGIN, "User logged in", &req)
        .await;

    let role_names = roles.names_for_user(user.id).await?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserResponse::from_user(user, role_names),
    }))
}

pub async fn logout(
    req: HttpRequest,
    auth: web::Data<AuthService>,
    logger: web::Data<ActivityLogger>,
    authed: AuthedUser,
) -> Result<HttpResponse, AppError> {
    auth.logout(authed.token_id).await?;
    logger
        .log(Some(authed.user_id()), actions::LOGOUT, "User logged out", &req)
        .await;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Logged out")))
}

pub async fn forgot_password(
    auth: web::Data<AuthService>,
    config: web::Data<Config>,
    input: web::Json<ForgotPasswordInput>,
) -> Result<HttpResponse, AppError> {
    let token = auth.forgot_password(&input.email).await?;

    let mut body = json!({ "message": "Reset link sent" });
    if !config.is_production() {
        body["token"] = json!(token);
    }

    Ok(HttpResponse::Ok().json(body))
}

pub async fn reset_password(
    auth: web::Data<AuthService>,
    input: web::Json<ResetPasswordInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    input.validate()?;

    auth.reset_password(&input.token, &input.email, &input.password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password has been reset")))
}

pub async fn verify_email(
    auth: web::Data<AuthService>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    auth.verify_email(&token).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Email verified")))
}

pub async fn resend_verification(
    auth: web::Data<AuthService>,
    config: web::Data<Config>,
    authed: AuthedUser,
) -> Result<HttpResponse, AppError> {
    if authed.user.email_verified_at.is_some() {
        return Ok(HttpResponse::Ok().json(MessageResponse::new("Email already verified")));
    }

    let verification_link = auth.verification_link(&authed.user)?;
    if config.is_production() {
        log::info!(
            "verification link for {}: {}",
            authed.user.email,
            verification_link
        );
    }

    let mut body = json!({ "message": "Verification link sent" });
    if !config.is_production() {
        body["verification_link"] = json!(verification_link);
    }

    Ok(HttpResponse::Ok().json(body))
}
