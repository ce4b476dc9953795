use axum::{
    extract::{Query, State},
    Extension, Json,
};
use growthpro_core::{market_insights, MarketInsights};

use crate::middleware::RequestId;

use super::{
    business::BusinessRequest, latency::INSIGHTS_DELAY_MS, validation_error, ApiError,
    ApiResponse, AppState, ResponseMeta,
};

pub(super) async fn get_business_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<BusinessRequest>,
) -> Result<Json<ApiResponse<MarketInsights>>, ApiError> {
    let query = params
        .validate()
        .map_err(|e| validation_error(req_id.0.clone(), &e))?;

    state.latency.pause(INSIGHTS_DELAY_MS).await;

    Ok(Json(ApiResponse {
        data: market_insights(&query),
        meta: ResponseMeta::new(req_id.0),
    }))
}
