//! HTTP client for the workflow engine.

use crate::config::EngineConfig;
use relay_core::RelayError;
use serde::Serialize;

/// Raw result of one HTTP exchange: status plus the body read as text.
///
/// The body is always read as text first: the engine may legitimately
/// return an empty or plain-text body, and eager JSON decoding would
/// throw before those cases can be told apart.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Client for the external workflow engine. Performs exactly one POST
/// per call: no retries, no timeout override beyond platform defaults.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    http: reqwest::Client,
    config: EngineConfig,
}

impl WorkflowClient {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    /// POST `body` as JSON to `{base_url}/{route}` and read the response
    /// body as text. Only transport-level problems are errors here; a
    /// non-2xx status is a successful exchange for the normalizer to
    /// classify.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        route: &str,
        body: &B,
    ) -> Result<RawResponse, RelayError> {
        let base = self.config.base_url.as_deref().ok_or_else(|| {
            RelayError::Transport("workflow engine URL is not configured".to_string())
        })?;
        let url = format!("{}/{}", base.trim_end_matches('/'), route);

        tracing::debug!(%url, "relaying request to workflow engine");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RelayError::Transport(format!("failed to connect to workflow engine: {e}"))
                } else {
                    RelayError::Transport(format!("workflow engine request failed: {e}"))
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            RelayError::Transport(format!("failed to read workflow engine response: {e}"))
        })?;

        tracing::debug!(status, body_len = body.len(), "workflow engine responded");

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::Request;
    use axum::response::Response;
    use axum::routing::post;
    use axum::Router;
    use serde_json::json;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    /// Start a throwaway upstream and return its base URL.
    async fn start_upstream(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: &str) -> WorkflowClient {
        WorkflowClient::new(EngineConfig::new(base_url))
    }

    #[tokio::test]
    async fn test_posts_json_and_reads_text() {
        let app = Router::new().route(
            "/ai-test",
            post(|req: Request| async move {
                let bytes = axum::body::to_bytes(req.into_body(), usize::MAX)
                    .await
                    .unwrap();
                let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
                assert_eq!(parsed["message"], "hello");

                Response::builder()
                    .status(200)
                    .header("content-type", "application/json")
                    .body(Body::from("{\"response\":\"hi there\"}"))
                    .unwrap()
            }),
        );

        let base = start_upstream(app).await;
        let raw = client_for(&base)
            .send("ai-test", &json!({"message": "hello"}))
            .await
            .unwrap();

        assert_eq!(raw.status, 200);
        assert_eq!(raw.body, "{\"response\":\"hi there\"}");
    }

    #[tokio::test]
    async fn test_non_2xx_is_not_a_transport_error() {
        let app = Router::new().route(
            "/ai-test",
            post(|| async {
                Response::builder()
                    .status(503)
                    .body(Body::from("workflow disabled"))
                    .unwrap()
            }),
        );

        let base = start_upstream(app).await;
        let raw = client_for(&base)
            .send("ai-test", &json!({"message": "hello"}))
            .await
            .unwrap();

        assert_eq!(raw.status, 503);
        assert_eq!(raw.body, "workflow disabled");
    }

    #[tokio::test]
    async fn test_empty_body_read_as_empty_text() {
        let app = Router::new().route(
            "/document-qa",
            post(|| async { Response::builder().status(200).body(Body::empty()).unwrap() }),
        );

        let base = start_upstream(app).await;
        let raw = client_for(&base)
            .send("document-qa", &json!({"query": "refund policy"}))
            .await
            .unwrap();

        assert_eq!(raw.status, 200);
        assert!(raw.body.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_base_url_is_transport_error() {
        let client = WorkflowClient::new(EngineConfig::default());
        let err = client
            .send("ai-test", &json!({"message": "hello"}))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
        assert!(err.to_string().contains("not configured"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener so the port is known-dead.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}"));
        let err = client
            .send("ai-test", &json!({"message": "hello"}))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_tolerated() {
        let app = Router::new().route(
            "/email-classifier",
            post(|| async {
                Response::builder()
                    .status(200)
                    .body(Body::from("{}"))
                    .unwrap()
            }),
        );

        let base = start_upstream(app).await;
        let raw = client_for(&format!("{base}/"))
            .send("email-classifier", &json!({"emailText": "hi"}))
            .await
            .unwrap();
        assert_eq!(raw.status, 200);
    }
}
