use actix_web::test;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

mod common;

#[actix_web::test]
async fn news_round_trips_localized_title_and_content() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, author_id) = common::auth_user(&app, "editor@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/news")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": { "en": "Roster change", "fr": "Changement d'effectif" },
            "content": { "en": "Full story.", "fr": "L'article complet." },
            "slug": "roster-change",
            "author_id": author_id,
            "published_at": "2026-02-01T09:00:00Z",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);
    let created: Value = test::read_body_json(res).await;

    assert_eq!(created["title"]["fr"], "Changement d'effectif");
    assert_eq!(created["title"].get("ar"), None);
    assert_eq!(created["slug"], "roster-change");
    assert_eq!(created["author_id"], author_id);
}

#[actix_web::test]
async fn news_requires_a_real_author_and_a_free_slug() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, author_id) = common::auth_user(&app, "editor@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/news")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": { "en": "First" },
            "content": { "en": "Body" },
            "slug": "breaking",
            "author_id": author_id,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/news")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": { "en": "Second" },
            "content": { "en": "Body" },
            "slug": "breaking",
            "author_id": author_id,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["slug"].is_array());

    let req = test::TestRequest::post()
        .uri("/api/news")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": { "en": "Orphan" },
            "content": { "en": "Body" },
            "slug": "orphan",
            "author_id": uuid::Uuid::new_v4(),
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["author_id"].is_array());
}

#[actix_web::test]
async fn news_title_needs_at_least_one_translation() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, author_id) = common::auth_user(&app, "editor@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/news")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": {},
            "content": { "en": "Body" },
            "slug": "empty-title",
            "author_id": author_id,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["title"].is_array());
}

#[actix_web::test]
async fn event_rejects_end_before_start() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, user_id) = common::auth_user(&app, "organizer@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/events")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": { "en": "Finals" },
            "location": "Paris",
            "start_date": "2026-06-02T18:00:00Z",
            "end_date": "2026-06-01T18:00:00Z",
            "created_by": user_id,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["end_date"].is_array());
}

#[actix_web::test]
async fn event_crud_round_trip() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, user_id) = common::auth_user(&app, "organizer@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/events")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": { "en": "Open qualifier" },
            "description": { "en": "Online qualifier, open signup." },
            "location": "Online",
            "start_date": "2026-05-01T12:00:00Z",
            "end_date": "2026-05-03T20:00:00Z",
            "created_by": user_id,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);
    let event: Value = test::read_body_json(res).await;
    let id = event["id"].as_i64().unwrap();
    assert_eq!(event["location"], "Online");

    let req = test::TestRequest::put()
        .uri(&format!("/api/events/{id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "title": { "en": "Open qualifier", "fr": "Qualifications ouvertes" },
            "location": "Online",
            "start_date": "2026-05-01T12:00:00Z",
            "end_date": "2026-05-04T20:00:00Z",
            "created_by": user_id,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["title"]["fr"], "Qualifications ouvertes");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/events/{id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    assert_eq!(common::count_rows(&db.pool, "events").await, 0);
}

#[actix_web::test]
async fn page_slug_is_unique() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/pages")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "slug": "about",
            "title": { "en": "About us" },
            "content": { "en": "The organization." },
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/pages")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "slug": "about",
            "title": { "fr": "À propos" },
            "content": { "fr": "L'organisation." },
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["slug"].is_array());
}

#[actix_web::test]
async fn sponsors_have_no_show_route() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/sponsors")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Red Bull", "website": "https://redbull.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);
    let sponsor: Value = test::read_body_json(res).await;
    let id = sponsor["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/sponsors/{id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);

    let req = test::TestRequest::put()
        .uri(&format!("/api/sponsors/{id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Red Bull Gaming", "website": "https://redbull.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["name"], "Red Bull Gaming");
}

#[actix_web::test]
async fn staff_roles_list_create_and_delete() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/staff-roles")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Analyst" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);
    let role: Value = test::read_body_json(res).await;
    let id = role["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/staff-roles")
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    let list: Value = test::read_body_json(res).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/staff-roles/{id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    assert_eq!(common::count_rows(&db.pool, "staff_roles").await, 0);
}
