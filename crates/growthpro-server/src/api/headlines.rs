use axum::{
    extract::{Query, State},
    Extension, Json,
};
use growthpro_core::{regenerate_headline, HeadlineRegeneration};

use crate::middleware::RequestId;

use super::{
    business::BusinessRequest, latency::HEADLINE_DELAY_MS, validation_error, ApiError,
    ApiResponse, AppState, ResponseMeta,
};

pub(super) async fn get_regenerated_headline(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<BusinessRequest>,
) -> Result<Json<ApiResponse<HeadlineRegeneration>>, ApiError> {
    let query = params
        .validate()
        .map_err(|e| validation_error(req_id.0.clone(), &e))?;

    state.latency.pause(HEADLINE_DELAY_MS).await;

    let regenerated = regenerate_headline(&mut rand::rng(), &query);
    tracing::debug!(
        request_id = %req_id.0,
        business_type = %regenerated.business_type,
        alternatives = regenerated.alternatives.len(),
        "regenerated headline"
    );

    Ok(Json(ApiResponse {
        data: regenerated,
        meta: ResponseMeta::new(req_id.0),
    }))
}
