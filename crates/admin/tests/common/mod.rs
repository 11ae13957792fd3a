//! Shared test support: in-memory databases, mock mailers and a request
//! helper for driving the router in-process.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use r4c_admin::config::{AdminConfig, EmailConfig};
use r4c_admin::db::MIGRATOR;
use r4c_admin::routes;
use r4c_admin::services::email::{EmailError, Mailer, OutgoingEmail};
use r4c_admin::state::AppState;

/// A fresh in-memory database with migrations applied.
///
/// A single connection keeps every handle on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    MIGRATOR.run(&pool).await.expect("run migrations");
    pool
}

/// Configuration stand-in; nothing network-facing is exercised in-process.
pub fn test_config() -> AdminConfig {
    AdminConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().expect("valid host"),
        port: 8000,
        email: EmailConfig {
            smtp_host: "smtp.test.invalid".to_owned(),
            smtp_port: 587,
            smtp_username: "mailer".to_owned(),
            smtp_password: SecretString::from("kT9#vW2$mQ7!xR4&"),
            from_address: "no-reply@test.invalid".to_owned(),
        },
    }
}

/// Application state over the given pool and mailer.
pub fn test_state(pool: SqlitePool, mailer: Arc<dyn Mailer>) -> AppState {
    AppState::new(test_config(), pool, mailer)
}

/// The routed application, ready for `oneshot` calls.
pub fn app(state: AppState) -> Router {
    routes::routes().with_state(state)
}

/// A mailer that records every message it is asked to deliver.
#[derive(Default)]
pub struct MockMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

impl MockMailer {
    pub fn sent_mail(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().expect("mailer mutex").clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, mail: &OutgoingEmail) -> Result<(), EmailError> {
        self.sent.lock().expect("mailer mutex").push(mail.clone());
        Ok(())
    }
}

/// A mailer whose deliveries always fail.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _mail: &OutgoingEmail) -> Result<(), EmailError> {
        Err(EmailError::Rejected("SMTP relay unavailable".to_owned()))
    }
}

/// POST a JSON body and return status plus parsed response body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_owned()))
                .expect("build request"),
        )
        .await
        .expect("infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("JSON response body");
    (status, value)
}

/// GET a path and return the raw response.
pub async fn get_raw(app: Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    )
    .await
    .expect("infallible")
}
