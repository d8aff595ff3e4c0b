use actix_web::{dev::Payload, web::Data, FromRequest, HttpRequest};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::Config;
use crate::database::models::{Locale, LoginInput, RegisterInput, User, UserStatus};
use crate::database::repositories::{
    ApiTokenRepository, PasswordResetTokenRepository, RoleRepository, UserRepository,
};
use crate::error::{AppError, ValidationErrors};
use crate::validation::taken;

const VERIFY_EMAIL_PURPOSE: &str = "verify_email";

/// Claims of the short-lived signed token embedded in email
/// verification links. Session tokens are opaque and DB-backed instead,
/// so logging out can revoke exactly one of them.
#[derive(Debug, Serialize, Deserialize)]
struct VerifyClaims {
    sub: Uuid,
    purpose: String,
    exp: usize,
}

#[derive(Clone)]
pub struct AuthService {
    user_repository: UserRepository,
    role_repository: RoleRepository,
    token_repository: ApiTokenRepository,
    reset_repository: PasswordResetTokenRepository,
    config: Config,
}

impl AuthService {
    pub fn new(
        user_repository: UserRepository,
        role_repository: RoleRepository,
        token_repository: ApiTokenRepository,
        reset_repository: PasswordResetTokenRepository,
        config: Config,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            token_repository,
            reset_repository,
            config,
        }
    }

    /// Create the account, assign the default role, and return the new
    /// user. The caller logs the activity and surfaces the verification
    /// link; the raw credential never leaves this method.
    pub async fn register(&self, input: RegisterInput) -> Result<User, AppError> {
        if self.user_repository.email_exists(&input.email, None).await? {
            return Err(ValidationErrors::single("email", taken("email")));
        }

        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            username: None,
            email: input.email,
            password: password_hash,
            phone: None,
            locale: input.locale.unwrap_or(Locale::Fr),
            status: UserStatus::Active,
            last_login_at: None,
            email_verified_at: None,
            created_at: now,
            updated_at: now,
        };

        self.user_repository.create(&user).await?;

        if let Some(role) = self.role_repository.find_by_name("user").await? {
            self.role_repository.assign_to_user(role.id, user.id).await?;
        }

        Ok(user)
    }

    /// Verify credentials and issue an opaque bearer token. The failure
    /// reason is never distinguished, so emails cannot be enumerated.
    pub async fn login(&self, input: LoginInput) -> Result<(String, User), AppError> {
        let mut user = self
            .user_repository
            .find_by_email(&input.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(&input.password, &user.password)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = random_token(40);
        self.token_repository
            .create(user.id, &hash_token(&token))
            .await?;

        let now = Utc::now();
        self.user_repository.set_last_login(user.id, now).await?;
        user.last_login_at = Some(now);

        Ok((token, user))
    }

    /// Resolve a bearer token to its user. Revoked and unknown tokens are
    /// indistinguishable from the outside.
    pub async fn authenticate(&self, token: &str) -> Result<AuthedUser, AppError> {
        let api_token = self
            .token_repository
            .find_by_hash(&hash_token(token))
            .await?
            .ok_or(AppError::Unauthorized)?;

        let user = self
            .user_repository
            .find_by_id(api_token.user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if let Err(e) = self.token_repository.touch(api_token.id).await {
            log::warn!("failed to stamp token usage: {}", e);
        }

        Ok(AuthedUser {
            user,
            token_id: api_token.id,
        })
    }

    /// Invalidate the presented token only; the user's other sessions
    /// stay logged in.
    pub async fn logout(&self, token_id: i64) -> Result<(), AppError> {
        self.token_repository.delete(token_id).await?;
        Ok(())
    }

    /// Create a single-use reset token for the account. Unknown emails
    /// fail the way the original API fails.
    pub async fn forgot_password(&self, email: &str) -> Result<String, AppError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::BadRequest("Unable to send reset link".to_string()))?;

        let token = random_token(64);
        let expires_at = Utc::now() + Duration::minutes(self.config.reset_token_minutes);
        self.reset_repository
            .create(user.id, &token, expires_at)
            .await?;

        // Mail delivery is out of band; surface the link in the log the
        // way operators expect during development.
        log::info!(
            "password reset link for {}: {}/auth/reset-password?token={}",
            email,
            self.config.frontend_url,
            token
        );

        Ok(token)
    }

    /// Redeem a reset token exactly once and replace the credential. Any
    /// other outstanding tokens for the user die with it.
    pub async fn reset_password(
        &self,
        token: &str,
        email: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let reset_token = self
            .reset_repository
            .find_valid(token)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid token".to_string()))?;

        let user = self
            .user_repository
            .find_by_id(reset_token.user_id)
            .await?
            .filter(|user| user.email == email)
            .ok_or_else(|| AppError::BadRequest("Invalid token".to_string()))?;

        let password_hash =
            hash(new_password, DEFAULT_COST).map_err(|e| AppError::Internal(e.to_string()))?;

        self.user_repository
            .update_password(user.id, &password_hash)
            .await?;
        self.reset_repository.mark_used(reset_token.id).await?;
        self.reset_repository.invalidate_for_user(user.id).await?;

        Ok(())
    }

    /* ===== email verification ===== */

    pub fn verification_link(&self, user: &User) -> Result<String, AppError> {
        let claims = VerifyClaims {
            sub: user.id,
            purpose: VERIFY_EMAIL_PURPOSE.to_string(),
            exp: (Utc::now() + Duration::hours(24)).timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
        .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(format!("{}/api/email/verify/{}", self.config.frontend_url, token))
    }

    pub async fn verify_email(&self, token: &str) -> Result<(), AppError> {
        let data = decode::<VerifyClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AppError::BadRequest("Invalid verification link".to_string()))?;

        if data.claims.purpose != VERIFY_EMAIL_PURPOSE {
            return Err(AppError::BadRequest("Invalid verification link".to_string()));
        }

        let user = self
            .user_repository
            .find_by_id(data.claims.sub)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid verification link".to_string()))?;

        if user.email_verified_at.is_none() {
            self.user_repository.mark_email_verified(user.id).await?;
        }

        Ok(())
    }
}

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header of a protected route.
#[derive(Clone)]
pub struct AuthedUser {
    pub user: User,
    pub token_id: i64,
}

impl AuthedUser {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let service = req.app_data::<Data<AuthService>>().cloned();

        Box::pin(async move {
            let token = token.ok_or(AppError::Unauthorized)?;
            let service = service
                .ok_or_else(|| AppError::Internal("AuthService not configured".to_string()))?;

            service.authenticate(&token).await
        })
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

fn random_token(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn hash_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
