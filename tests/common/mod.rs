#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, App, Error};
use anyhow::Result;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;

use arena_api::database::init_database;
use arena_api::{configure_app, Config};

pub struct TestDb {
    pub pool: SqlitePool,
    temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb { pool, temp_dir })
    }

    /// Test configuration: non-production so one-time tokens come back in
    /// response bodies, uploads under the test's temp dir.
    pub fn config(&self) -> Config {
        Config {
            database_url: String::new(),
            jwt_secret: "test-jwt-secret-key-that-is-long-enough".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            storage_root: format!("{}/public", self.temp_dir.path().display()),
            reset_token_minutes: 60,
        }
    }
}

pub async fn spawn_app(
    pool: &SqlitePool,
    config: &Config,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(App::new().configure(|cfg| configure_app(cfg, pool, config))).await
}

pub async fn register_user(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
    email: &str,
) -> Value {
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "first_name": "Test",
            "last_name": "Player",
            "email": email,
            "password": "password123",
            "password_confirmation": "password123",
        }))
        .to_request();

    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), 201, "registration failed for {email}");
    test::read_body_json(res).await
}

pub async fn login(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
    email: &str,
    password: &str,
) -> String {
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();

    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), 200, "login failed for {email}");

    let body: Value = test::read_body_json(res).await;
    body["token"].as_str().expect("token in login body").to_string()
}

/// Register and log in a fresh account, returning (token, user id).
pub async fn auth_user(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
    email: &str,
) -> (String, String) {
    let registered = register_user(app, email).await;
    let user_id = registered["user"]["id"]
        .as_str()
        .expect("user id in registration body")
        .to_string();
    let token = login(app, email, "password123").await;

    (token, user_id)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count query")
}

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}
