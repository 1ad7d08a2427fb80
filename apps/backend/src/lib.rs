pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flashcards_core::TestBuilder;

use crate::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub builder: Arc<TestBuilder>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::default()),
            builder: Arc::new(TestBuilder::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full application router. Shared by `run()` and the API tests.
pub fn router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // Card routes
        .route("/api/cards", post(routes::cards::create))
        .route("/api/cards", get(routes::cards::list))
        .route("/api/cards/:id", get(routes::cards::get_by_id))
        .route("/api/cards/:id", delete(routes::cards::remove))
        // Collection routes
        .route("/api/collections", post(routes::collections::create))
        .route("/api/collections", get(routes::collections::list))
        .route("/api/collections/:id", get(routes::collections::get_by_id))
        .route("/api/collections/:id", delete(routes::collections::remove))
        // Test routes
        .route("/api/tests/generate", post(routes::tests::generate))
        .route("/api/tests/check", post(routes::tests::check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/register", post(routes::auth::register))
        .merge(protected_routes)
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new();

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
