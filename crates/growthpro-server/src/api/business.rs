use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use growthpro_core::{generate_report, BusinessQuery, GeneratedReport, ValidationError};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{
    latency::REPORT_DELAY_MS, validation_error, ApiError, ApiResponse, AppState, ResponseMeta,
};

/// Name and location as submitted by a client. Either may be absent; absence
/// is reported as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub(super) struct BusinessRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl BusinessRequest {
    /// Parses a POST body. A blank body or a JSON `null` reads as an empty
    /// request so the missing fields surface through [`Self::validate`].
    pub(super) fn from_body(body: &[u8]) -> Result<Self, JsonRejection> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let Json(parsed) = Json::<Option<Self>>::from_bytes(body)?;
        Ok(parsed.unwrap_or_default())
    }

    pub(super) fn validate(&self) -> Result<BusinessQuery, ValidationError> {
        BusinessQuery::from_parts(self.name.as_deref(), self.location.as_deref())
    }
}

pub(super) async fn create_business_report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<ApiResponse<GeneratedReport>>, ApiError> {
    let body = BusinessRequest::from_body(&body).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "malformed business request body");
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;
    let query = body
        .validate()
        .map_err(|e| validation_error(req_id.0.clone(), &e))?;

    state.latency.pause(REPORT_DELAY_MS).await;

    let report = generate_report(&mut rand::rng(), &query);
    tracing::info!(
        request_id = %req_id.0,
        business_type = %report.business_type,
        location_type = %report.location_type,
        rating = report.rating,
        reviews = report.reviews,
        "generated business report"
    );

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}
