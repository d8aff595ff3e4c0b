use actix_web::test;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

mod common;

#[actix_web::test]
async fn discipline_crud_round_trip() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/disciplines")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Counter-Strike 2", "slug": "cs2" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);
    let created: Value = test::read_body_json(res).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["slug"], "cs2");

    let req = test::TestRequest::get()
        .uri(&format!("/api/disciplines/{id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let req = test::TestRequest::put()
        .uri(&format!("/api/disciplines/{id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Counter-Strike", "slug": "cs2", "description": "FPS" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["name"], "Counter-Strike");
    assert_eq!(updated["description"], "FPS");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/disciplines/{id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/disciplines/{id}"))
        .insert_header(common::bearer(&token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 404);
}

#[actix_web::test]
async fn duplicate_slug_is_rejected_but_own_slug_survives_update() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/disciplines")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Valorant", "slug": "valorant" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 201);
    let created: Value = test::read_body_json(res).await;
    let id = created["id"].as_i64().unwrap();

    // Another discipline may not reuse the slug.
    let req = test::TestRequest::post()
        .uri("/api/disciplines")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Valorant EU", "slug": "valorant" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["slug"].is_array());

    // Re-submitting the unchanged slug on update is not a collision.
    let req = test::TestRequest::put()
        .uri(&format!("/api/disciplines/{id}"))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Valorant", "slug": "valorant" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), 200);
}

#[actix_web::test]
async fn validation_errors_are_field_keyed() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let req = test::TestRequest::post()
        .uri("/api/disciplines")
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "", "slug": "x".repeat(200) }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "The given data was invalid.");
    assert!(body["errors"]["name"].is_array());
    assert!(body["errors"]["slug"].is_array());
}

#[actix_web::test]
async fn multipart_create_stores_the_logo() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let boundary = "----arena-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"name\"\r\n\r\n\
         Rocket League\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"slug\"\r\n\r\n\
         rocket-league\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"logo\"; filename=\"logo.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         fake-png-bytes\r\n\
         --{boundary}--\r\n"
    );

    let req = test::TestRequest::post()
        .uri("/api/disciplines")
        .insert_header(common::bearer(&token))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        ))
        .set_payload(body)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 201);
    let created: Value = test::read_body_json(res).await;
    let logo = created["logo"].as_str().unwrap();
    assert!(logo.starts_with("storage/disciplines/"));
    assert!(logo.ends_with(".png"));

    let on_disk = std::path::Path::new(&config.storage_root).join(logo);
    assert_eq!(std::fs::read(on_disk).unwrap(), b"fake-png-bytes");
}

#[actix_web::test]
async fn multipart_rejects_non_image_uploads() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let config = db.config();
    let app = common::spawn_app(&db.pool, &config).await;
    let (token, _) = common::auth_user(&app, "admin@example.com").await;

    let boundary = "----arena-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"name\"\r\n\r\n\
         Dota 2\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"slug\"\r\n\r\n\
         dota2\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"logo\"; filename=\"evil.sh\"\r\n\
         Content-Type: application/x-sh\r\n\r\n\
         #!/bin/sh\r\n\
         --{boundary}--\r\n"
    );

    let req = test::TestRequest::post()
        .uri("/api/disciplines")
        .insert_header(common::bearer(&token))
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        ))
        .set_payload(body)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), 422);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"]["logo"].is_array());
}
