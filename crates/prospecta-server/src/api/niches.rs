use axum::{extract::Query, Extension, Json};
use prospecta_niche::{get_solutions, NicheProfile};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiResponse, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ResolveQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ResolveData {
    niche: &'static str,
    profile: &'static NicheProfile,
}

pub(super) async fn resolve(
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ResolveQuery>,
) -> Json<ApiResponse<ResolveData>> {
    let profile = get_solutions(query.category.as_deref());
    Json(ApiResponse {
        data: ResolveData {
            niche: profile.key,
            profile,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
