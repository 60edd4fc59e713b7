//! Common test helpers for endpoint tests.
//!
//! Builds the real router over an `InMemoryStore` and sends requests
//! through it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use trivia_server::db::{InMemoryStore, TriviaStore};
use trivia_server::http::{build_router, AppState};
use trivia_server::models::NewQuestion;

/// Router plus a handle on the store behind it
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub router: Router,
}

impl TestApp {
    /// App with no categories and no questions.
    pub fn empty() -> Self {
        Self::from_store(InMemoryStore::new())
    }

    /// App with the six standard categories and no questions.
    pub async fn with_categories() -> Self {
        Self::from_store(InMemoryStore::with_default_categories().await)
    }

    fn from_store(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        let router = build_router(AppState::new(store.clone()));
        Self { store, router }
    }

    /// Insert `count` questions in `category`, returning their ids.
    pub async fn seed_questions(&self, count: usize, category: &str) -> Vec<i32> {
        let mut ids = Vec::with_capacity(count);
        for n in 0..count {
            let id = self
                .store
                .insert_question(question(&format!("Question number {n}?"), category))
                .await
                .expect("seed insert failed");
            ids.push(id);
        }
        ids
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_owned())).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("request build failed");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response is not JSON")
        };
        (status, json)
    }
}

pub fn question(text: &str, category: &str) -> NewQuestion {
    NewQuestion {
        question: text.to_owned(),
        answer: "answer".to_owned(),
        difficulty: 1,
        category: category.to_owned(),
    }
}

/// Assert the fixed 404 body. `error` is 400 on purpose.
pub fn assert_not_found(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "resource not found");
}

/// Assert the fixed 422 body.
pub fn assert_unprocessable(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);
    assert_eq!(body["message"], "unable process");
}
