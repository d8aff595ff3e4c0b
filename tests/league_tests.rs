use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

mod common;

struct Fixture {
    token: String,
    discipline_id: i64,
    team_id: i64,
    league_id: i64,
}

async fn seed(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
) -> Fixture {
    let (token, _) = common::auth_user(app, "admin@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/disciplines")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "CS2", "slug": "cs2" }))
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), 201);
    let discipline: Value = test::read_body_json(res).await;
    let discipline_id = discipline["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "discipline_id": discipline_id, "name": "NAVI", "tag": "NAVI" }))
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), 201);
    let team: Value = test::read_body_json(res).await;
    let team_id = team["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/leagues")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "name": "Winter Cup",
            "discipline_id": discipline_id,
            "start_date": "2026-01-10T00:00:00Z",
            "end_date": "2026-03-01T00:00:00Z",
        }))
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), 201);
    let league: Value = test::read_body_json(res).await;
    let league_id = league["id"].as_i64().unwrap();

    Fixture {
        token,
        discipline_id,
        team_id,
        league_id,
    }
}

#[actix_web::test]
async fn league_rejects_end_date_before_start_date() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let fx = seed(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/leagues")
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({
            "name": "Backwards Cup",
            "discipline_id": fx.discipline_id,
            "start_date": "2026-03-01T00:00:00Z",
            "end_date": "2026-01-10T00:00:00Z",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["end_date"].is_array());
}

#[actix_web::test]
async fn attached_team_starts_at_zero_points_and_keeps_them_on_reattach() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let fx = seed(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/add", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["teams"][0]["points"], 0);

    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/points", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id, "points": 12 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["teams"][0]["points"], 12);

    // Re-adding the same team must not reset its score.
    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/add", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["teams"].as_array().unwrap().len(), 1);
    assert_eq!(body["teams"][0]["points"], 12);
}

#[actix_web::test]
async fn points_for_a_team_outside_the_league_is_not_found() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let fx = seed(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/points", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id, "points": 5 }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 404);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Team is not part of this league");
}

#[actix_web::test]
async fn negative_points_are_a_validation_error() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let fx = seed(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/points", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id, "points": -3 }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["points"].is_array());
}

#[actix_web::test]
async fn removing_a_team_drops_it_from_the_standings() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let fx = seed(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/add", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/remove", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["teams"], json!([]));

    // The team itself survives.
    let req = test::TestRequest::get()
        .uri(&format!("/api/teams/{}", fx.team_id))
        .insert_header(common::bearer(&fx.token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
}

#[actix_web::test]
async fn deleting_a_league_keeps_its_teams() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let fx = seed(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/leagues/{}/teams/add", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .set_json(json!({ "team_id": fx.team_id }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/leagues/{}", fx.league_id))
        .insert_header(common::bearer(&fx.token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    assert_eq!(common::count_rows(&db.pool, "league_team").await, 0);
    assert_eq!(common::count_rows(&db.pool, "teams").await, 1);
}
