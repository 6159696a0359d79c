use axum::{Extension, Json};
use prospecta_scoring::{
    score, score_color, score_label, BusinessSignal, PlaceSnapshot, ScoreColor, ScoreResult,
};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ScoreData {
    #[serde(flatten)]
    result: ScoreResult,
    is_chain: bool,
    color: ScoreColor,
    label: &'static str,
}

pub(super) async fn score_place(
    Extension(req_id): Extension<RequestId>,
    Json(place): Json<PlaceSnapshot>,
) -> Json<ApiResponse<ScoreData>> {
    let signal = BusinessSignal::from_place(&place);
    let result = score(&signal);
    tracing::debug!(
        name = %place.name,
        total = result.total,
        opportunity = %result.opportunity_type,
        "scored place"
    );

    let data = ScoreData {
        is_chain: signal.is_chain,
        color: score_color(result.total),
        label: score_label(result.total),
        result,
    };
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::api::test_support::{app_without_provider, json_body, json_request};

    #[tokio::test]
    async fn scores_place_without_website_as_new_website() {
        let body = serde_json::json!({
            "name": "Restaurante La Terraza",
            "category": "restaurant",
            "rating": 4.6,
            "review_count": 150,
            "price_level": 2,
            "photo_count": 12
        });
        let response = app_without_provider()
            .oneshot(json_request("POST", "/api/v1/scoring/score", &body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["total"], 97);
        assert_eq!(json["data"]["opportunity_type"], "new_website");
        assert_eq!(json["data"]["color"], "success");
        assert_eq!(json["data"]["label"], "Muy Alta");
        assert_eq!(json["data"]["is_chain"], false);
        assert_eq!(json["data"]["factors"][0]["name"], "Sin sitio web");
    }

    #[tokio::test]
    async fn chain_with_website_is_capped() {
        let body = serde_json::json!({
            "name": "Starbucks Reforma",
            "website": "https://www.starbucks.com.mx",
            "types": ["cafe", "food"]
        });
        let response = app_without_provider()
            .oneshot(json_request("POST", "/api/v1/scoring/score", &body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["is_chain"], true);
        assert_eq!(json["data"]["has_website"], true);
        assert!(json["data"]["total"].as_u64().expect("total") <= 25);
        assert_ne!(json["data"]["opportunity_type"], "new_website");
    }
}
