//! Shared integration test helpers: a real router over a temp SQLite file

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;

use pos_server::db::DbService;
use pos_server::{Config, LogMailer, ReceiptMailer, ServerState, api};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub state: ServerState,
    pub router: Router,
    // Dropped last: removes the database file
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_mailer(Arc::new(LogMailer)).await
}

/// Same as [`spawn_app`] with a custom receipt mailer
pub async fn spawn_app_with_mailer(mailer: Arc<dyn ReceiptMailer>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_database(dir.path().join("pos.db").to_string_lossy());
    let db = DbService::new(&config).await.unwrap();
    let state = ServerState::new(config, db, mailer);
    let router = api::build_app(&state).with_state(state.clone());
    TestApp {
        state,
        router,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Issue one order and return its token number
    pub async fn issue(&self, category: &str, amount: f64) -> i64 {
        let (status, body) = self
            .post(
                "/api/orders",
                serde_json::json!({ "category": category, "amount": amount }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "body: {body}");
        body["tokenNumber"].as_i64().unwrap()
    }
}
