pub mod config;
pub mod database;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod storage;
pub mod validation;

use actix_web::web;
use sqlx::SqlitePool;

pub use config::Config;
pub use error::AppError;
pub use services::{ActivityLogger, AuthService};
pub use storage::Storage;

use database::repositories::{
    ActivityRepository, ApiTokenRepository, DisciplineRepository, EventRepository,
    LeagueRepository, NewsRepository, PageRepository, PasswordResetTokenRepository,
    RoleRepository, SponsorRepository, StaffRoleRepository, TeamRepository, UserRepository,
};

/// Wire repositories, services and routes into the app. `main` and the
/// integration tests build their `App` through this single entry point.
pub fn configure_app(cfg: &mut web::ServiceConfig, pool: &SqlitePool, config: &Config) {
    let user_repository = UserRepository::new(pool.clone());
    let role_repository = RoleRepository::new(pool.clone());
    let token_repository = ApiTokenRepository::new(pool.clone());
    let reset_repository = PasswordResetTokenRepository::new(pool.clone());
    let activity_repository = ActivityRepository::new(pool.clone());

    let auth_service = AuthService::new(
        user_repository.clone(),
        role_repository.clone(),
        token_repository,
        reset_repository,
        config.clone(),
    );
    let activity_logger = ActivityLogger::new(activity_repository);
    let storage = Storage::new(&config.storage_root);

    cfg.app_data(web::Data::new(config.clone()))
        .app_data(web::Data::new(auth_service))
        .app_data(web::Data::new(activity_logger))
        .app_data(web::Data::new(storage))
        .app_data(web::Data::new(user_repository))
        .app_data(web::Data::new(role_repository))
        .app_data(web::Data::new(DisciplineRepository::new(pool.clone())))
        .app_data(web::Data::new(TeamRepository::new(pool.clone())))
        .app_data(web::Data::new(StaffRoleRepository::new(pool.clone())))
        .app_data(web::Data::new(LeagueRepository::new(pool.clone())))
        .app_data(web::Data::new(NewsRepository::new(pool.clone())))
        .app_data(web::Data::new(EventRepository::new(pool.clone())))
        .app_data(web::Data::new(PageRepository::new(pool.clone())))
        .app_data(web::Data::new(SponsorRepository::new(pool.clone())));

    routes::configure(cfg);
}
