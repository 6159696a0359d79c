mod niches;
mod outreach;
mod scoring;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use prospecta_outreach::{OutreachComposer, OutreachError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<OutreachComposer>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    ai_provider: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "ai_not_configured" => StatusCode::SERVICE_UNAVAILABLE,
            "ai_provider_error" => StatusCode::BAD_GATEWAY,
            "ai_timeout" => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_outreach_error(request_id: String, error: &OutreachError) -> ApiError {
    match error {
        OutreachError::Configuration(_) => {
            tracing::warn!(error = %error, "AI provider not configured");
            ApiError::new(
                request_id,
                "ai_not_configured",
                "AI message generation is not configured",
            )
        }
        OutreachError::Validation(message) => {
            ApiError::new(request_id, "validation_error", message.clone())
        }
        OutreachError::Http(_) if error.is_timeout() => {
            tracing::error!(error = %error, "AI provider timed out");
            ApiError::new(request_id, "ai_timeout", "AI provider timed out")
        }
        OutreachError::Provider { .. }
        | OutreachError::InvalidResponse(_)
        | OutreachError::Http(_) => {
            tracing::error!(
                error = %error,
                retryable = error.is_retryable(),
                "AI provider call failed"
            );
            ApiError::new(request_id, "ai_provider_error", "AI provider call failed")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn api_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/scoring/score", post(scoring::score_place))
        .route("/api/v1/niches/resolve", get(niches::resolve))
        .route("/api/v1/outreach/generate", post(outreach::generate))
        .route("/api/v1/outreach/reply", post(outreach::reply))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(api_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let ai_provider = if state.composer.is_configured() {
        "configured"
    } else {
        "not_configured"
    };
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            ai_provider,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}


#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, time::Duration};

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::test_support::{app_without_provider, json_body, state};
    use super::*;

    #[test]
    fn api_error_codes_map_to_statuses() {
        let cases = [
            ("validation_error", StatusCode::BAD_REQUEST),
            ("rate_limited", StatusCode::TOO_MANY_REQUESTS),
            ("ai_not_configured", StatusCode::SERVICE_UNAVAILABLE),
            ("ai_provider_error", StatusCode::BAD_GATEWAY),
            ("ai_timeout", StatusCode::GATEWAY_TIMEOUT),
            ("something_else", StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            let response = ApiError::new("req-1", code, "message").into_response();
            assert_eq!(response.status(), status, "{code}");
        }
    }

    #[test]
    fn outreach_errors_map_to_api_codes() {
        let code = |error: OutreachError| map_outreach_error("req-1".into(), &error).error.code;
        assert_eq!(
            code(OutreachError::Configuration("missing".into())),
            "ai_not_configured"
        );
        assert_eq!(
            code(OutreachError::Provider {
                status: 500,
                body: String::new()
            }),
            "ai_provider_error"
        );
        assert_eq!(
            code(OutreachError::InvalidResponse("no choices".into())),
            "ai_provider_error"
        );
        assert_eq!(
            code(OutreachError::Validation("empty".into())),
            "validation_error"
        );
    }

    #[tokio::test]
    async fn health_reports_ai_provider_state() {
        let response = app_without_provider()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let json = json_body(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["ai_provider"], "not_configured");
    }

    #[tokio::test]
    async fn request_id_header_is_echoed() {
        let response = app_without_provider()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "req-abc")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok()),
            Some("req-abc")
        );
        let json = json_body(response).await;
        assert_eq!(json["meta"]["request_id"], "req-abc");
    }

    #[tokio::test]
    async fn api_routes_are_rate_limited_per_client() {
        let app = build_app(
            state("http://127.0.0.1:9/v1/chat/completions", None),
            RateLimitState::new(
                1,
                Duration::from_secs(60),
                NonZeroUsize::new(16).expect("nonzero"),
            ),
        );

        let request = |ip: &'static str| {
            Request::builder()
                .uri("/api/v1/niches/resolve?category=cafe")
                .header("x-forwarded-for", ip)
                .body(Body::empty())
                .expect("request")
        };

        let first = app
            .clone()
            .oneshot(request("203.0.113.1"))
            .await
            .expect("response");
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .clone()
            .oneshot(request("203.0.113.1"))
            .await
            .expect("response");
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        let json = json_body(second).await;
        assert_eq!(json["error"]["code"], "rate_limited");

        let other = app.oneshot(request("203.0.113.2")).await.expect("response");
        assert_eq!(other.status(), StatusCode::OK);
    }
}
