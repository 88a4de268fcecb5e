//! API Handlers
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use relay_core::{
    ChatRequest, DemoRequest, DocQaRequest, EmailRequest, Envelope, ExtractRequest,
    PhishingRequest, RELAY_VERSION,
};
use serde_json::{json, Value};

pub async fn chat(
    State(app): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<Envelope>) {
    respond(&app, req).await
}

pub async fn classify_email(
    State(app): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> (StatusCode, Json<Envelope>) {
    respond(&app, req).await
}

pub async fn extract_data(
    State(app): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> (StatusCode, Json<Envelope>) {
    respond(&app, req).await
}

pub async fn document_qa(
    State(app): State<AppState>,
    Json(req): Json<DocQaRequest>,
) -> (StatusCode, Json<Envelope>) {
    respond(&app, req).await
}

pub async fn detect_phishing(
    State(app): State<AppState>,
    Json(req): Json<PhishingRequest>,
) -> (StatusCode, Json<Envelope>) {
    respond(&app, req).await
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": RELAY_VERSION })),
    )
}

pub async fn metrics(State(app): State<AppState>) -> (StatusCode, String) {
    match app.metrics.encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn respond<R: DemoRequest>(app: &AppState, req: R) -> (StatusCode, Json<Envelope>) {
    let (status, envelope) = app.gateway.relay(&req).await;
    app.metrics.record(R::CAPABILITY, envelope.success);
    (status, Json(envelope))
}
