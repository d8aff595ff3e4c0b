use actix_web::web;

use crate::handlers::{
    auth, disciplines, events, leagues, news, pages, sponsors, staff_roles, teams, users,
};

/// The whole HTTP surface, mounted under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/register", web::post().to(auth::register))
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout))
            .route("/forgot-password", web::post().to(auth::forgot_password))
            .route("/reset-password", web::post().to(auth::reset_password))
            .route("/email/verify/{token}", web::get().to(auth::verify_email))
            .route("/email/resend", web::post().to(auth::resend_verification))
            .service(
                web::scope("/users")
                    .route("/{id}", web::get().to(users::show))
                    .route("/{id}", web::put().to(users::update))
                    .route("/{id}", web::patch().to(users::update))
                    .route("/{id}", web::delete().to(users::destroy)),
            )
            .service(
                web::scope("/disciplines")
                    .route("", web::get().to(disciplines::index))
                    .route("", web::post().to(disciplines::store))
                    .route("/{id}", web::get().to(disciplines::show))
                    .route("/{id}", web::put().to(disciplines::update))
                    .route("/{id}", web::patch().to(disciplines::update))
                    .route("/{id}", web::delete().to(disciplines::destroy)),
            )
            .service(
                web::scope("/teams")
                    .route("", web::get().to(teams::index))
                    .route("", web::post().to(teams::store))
                    .route("/{id}", web::get().to(teams::show))
                    .route("/{id}", web::put().to(teams::update))
                    .route("/{id}", web::patch().to(teams::update))
                    .route("/{id}", web::delete().to(teams::destroy))
                    .route("/{id}/players/add", web::post().to(teams::add_player))
                    .route("/{id}/players/remove", web::post().to(teams::remove_player))
                    .route("/{id}/staff/add", web::post().to(teams::add_staff))
                    .route("/{id}/staff/remove", web::post().to(teams::remove_staff)),
            )
            .service(
                web::scope("/leagues")
                    .route("", web::get().to(leagues::index))
                    .route("", web::post().to(leagues::store))
                    .route("/{id}", web::get().to(leagues::show))
                    .route("/{id}", web::put().to(leagues::update))
                    .route("/{id}", web::patch().to(leagues::update))
                    .route("/{id}", web::delete().to(leagues::destroy))
                    .route("/{id}/teams/add", web::post().to(leagues::add_team))
                    .route("/{id}/teams/remove", web::post().to(leagues::remove_team))
                    .route("/{id}/teams/points", web::post().to(leagues::set_points)),
            )
            .service(
                web::scope("/news")
                    .route("", web::get().to(news::index))
                    .route("", web::post().to(news::store))
                    .route("/{id}", web::get().to(news::show))
                    .route("/{id}", web::put().to(news::update))
                    .route("/{id}", web::patch().to(news::update))
                    .route("/{id}", web::delete().to(news::destroy)),
            )
            .service(
                web::scope("/events")
                    .route("", web::get().to(events::index))
                    .route("", web::post().to(events::store))
                    .route("/{id}", web::get().to(events::show))
                    .route("/{id}", web::put().to(events::update))
                    .route("/{id}", web::patch().to(events::update))
                    .route("/{id}", web::delete().to(events::destroy)),
            )
            .service(
                web::scope("/pages")
                    .route("", web::get().to(pages::index))
                    .route("", web::post().to(pages::store))
                    .route("/{id}", web::get().to(pages::show))
                    .route("/{id}", web::put().to(pages::update))
                    .route("/{id}", web::patch().to(pages::update))
                    .route("/{id}", web::delete().to(pages::destroy)),
            )
            // Sponsors and staff roles have no standalone show route.
            .service(
                web::scope("/sponsors")
                    .route("", web::get().to(sponsors::index))
                    .route("", web::post().to(sponsors::store))
                    .route("/{id}", web::put().to(sponsors::update))
                    .route("/{id}", web::patch().to(sponsors::update))
                    .route("/{id}", web::delete().to(sponsors::destroy)),
            )
            .service(
                web::scope("/staff-roles")
                    .route("", web::get().to(staff_roles::index))
                    .route("", web::post().to(staff_roles::store))
                    .route("/{id}", web::put().to(staff_roles::update))
                    .route("/{id}", web::patch().to(staff_roles::update))
                    .route("/{id}", web::delete().to(staff_roles::destroy)),
            ),
    );
}
