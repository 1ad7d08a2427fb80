//! Common test utilities for the backend API tests.
//!
//! All state lives in the in-memory store, so tests need no external
//! services; every `TestContext` is a fully isolated application.

pub mod fixtures;

use axum::Router;

use flashcards_backend::{router, AppState};

pub struct TestContext {
    app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            app: router(AppState::new()),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> axum::http::HeaderValue {
        format!("Bearer {}", token)
            .parse()
            .expect("token is valid header material")
    }
}
