//! Scan API router and runner.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use mailproof_core::{MailproofError, ScanRequest, ScanResponse};
use mailproof_scan::{DnsResolver, Evaluator, HickoryDns};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

struct AppState<R> {
    evaluator: Evaluator<R>,
}

/// Build the scan API router around an evaluator.
///
/// Generic over the resolver so tests can drive the full HTTP surface
/// against a [`mailproof_scan::StaticResolver`].
pub fn router<R>(evaluator: Evaluator<R>) -> Router
where
    R: DnsResolver + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/scan", post(scan::<R>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(AppState { evaluator }))
}

/// Bind and serve the scan API until shutdown.
pub async fn run(config: &ServerConfig) -> crate::Result<()> {
    let evaluator = Evaluator::with_resolver(HickoryDns::new(), config.scan_config());
    let app = router(evaluator);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .map_err(|e| crate::SrvError::Server(format!("bind {}: {e}", config.listen)))?;
    info!(addr = %config.listen, "scan API listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::SrvError::Server(e.to_string()))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn scan<R>(
    State(state): State<Arc<AppState<R>>>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ApiError>
where
    R: DnsResolver + 'static,
{
    let report = state.evaluator.evaluate(&request.domain).await?;
    Ok(Json(report.into()))
}

/// Maps evaluator errors onto HTTP responses: bad input is the
/// caller's fault, everything else is ours.
struct ApiError(MailproofError);

impl From<MailproofError> for ApiError {
    fn from(err: MailproofError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use mailproof_scan::{ScanConfig, StaticAnswer, StaticResolver};
    use tower::ServiceExt;

    fn test_router(resolver: StaticResolver) -> Router {
        router(Evaluator::with_resolver(resolver, ScanConfig::default()))
    }

    fn scan_request(domain: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/scan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "domain": domain }).to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let app = test_router(StaticResolver::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn scan_returns_named_mechanism_fields() {
        let resolver = StaticResolver::new([
            (
                "example.com".to_string(),
                StaticAnswer::Records(vec!["v=spf1 -all".to_string()]),
            ),
            (
                "_dmarc.example.com".to_string(),
                StaticAnswer::Records(vec!["v=DMARC1; p=quarantine;".to_string()]),
            ),
        ]);
        let app = test_router(resolver);

        let response = app.oneshot(scan_request("example.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["domain"], "example.com");
        assert_eq!(body["spf"]["status"], "pass");
        assert_eq!(body["dkim"]["status"], "fail");
        assert_eq!(body["dmarc"]["status"], "pass");
        assert_eq!(body["overall"], "fail");
        assert_eq!(body["score"], 66);
    }

    #[tokio::test]
    async fn invalid_domain_is_bad_request() {
        let app = test_router(StaticResolver::default());
        let response = app.oneshot(scan_request("not a domain")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("invalid domain"));
    }

    #[tokio::test]
    async fn lookup_failures_still_return_ok() {
        use mailproof_scan::LookupError;

        let resolver = StaticResolver::new([
            (
                "example.com".to_string(),
                StaticAnswer::Error(LookupError::ServFail),
            ),
            (
                "_dmarc.example.com".to_string(),
                StaticAnswer::Error(LookupError::ServFail),
            ),
        ]);
        let app = test_router(resolver);

        let response = app.oneshot(scan_request("example.com")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["spf"]["status"], "indeterminate");
        assert_eq!(body["dmarc"]["status"], "indeterminate");
        assert_eq!(body["overall"], "fail");
    }
}
