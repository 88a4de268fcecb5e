//! Relay Gateway: REST endpoints for the five demo capabilities.
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod relay;

use axum::{
    routing::{get, post},
    Router,
};
use relay_upstream::WorkflowClient;

pub use metrics::Metrics;
pub use relay::Gateway;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared per-process state: the relay gateway and its metrics. Cloned
/// per request; there is no other cross-demo mutable state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
            metrics: Arc::new(Metrics::new()),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/api/email-classifier", post(handlers::classify_email))
        .route("/api/data-extractor", post(handlers::extract_data))
        .route("/api/document-qa", post(handlers::document_qa))
        .route("/api/phishing-detect", post(handlers::detect_phishing))
        .route("/api/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str) {
    let state = AppState::new(Gateway::new(WorkflowClient::from_env()));
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("relay gateway listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
