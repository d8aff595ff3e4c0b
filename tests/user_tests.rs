use actix_web::test;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

mod common;

#[actix_web::test]
async fn show_returns_the_profile_without_the_credential() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, user_id) = common::auth_user(&app, "viewer@example.com").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["email"], "viewer@example.com");
    assert!(body.get("password").is_none());
    // last_login was stamped by the login that produced the token.
    assert!(body["last_login"].as_str().is_some());
}

#[actix_web::test]
async fn update_merges_only_the_provided_fields() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, user_id) = common::auth_user(&app, "merge@example.com").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "first_name": "Renamed", "locale": "en" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["first_name"], "Renamed");
    assert_eq!(body["locale"], "en");
    // Untouched fields keep their values.
    assert_eq!(body["last_name"], "Player");
    assert_eq!(body["email"], "merge@example.com");
}

#[actix_web::test]
async fn update_rejects_an_email_already_taken_by_someone_else() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, user_id) = common::auth_user(&app, "first@example.com").await;
    common::register_user(&app, "second@example.com").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "email": "second@example.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["email"].is_array());

    // Re-submitting one's own email is not a collision.
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "email": "first@example.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
}

#[actix_web::test]
async fn password_change_requires_confirmation_and_takes_effect() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, user_id) = common::auth_user(&app, "rotate@example.com").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "password": "fresh-password" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 422);

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "password": "fresh-password",
            "password_confirmation": "fresh-password",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    common::login(&app, "rotate@example.com", "fresh-password").await;
}

#[actix_web::test]
async fn destroy_removes_the_account_and_logs_the_action() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;
    let target = common::register_user(&app, "target@example.com").await;
    let target_id = target["user"]["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{target_id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{target_id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);

    let deletions: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM activity_logs WHERE action = 'user.delete'")
            .fetch_one(&db.pool)
            .await
            .unwrap();
    assert_eq!(deletions, 1);

    // Deleting again is a 404, not a silent success.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{target_id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);
}
