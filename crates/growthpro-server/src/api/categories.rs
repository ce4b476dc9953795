use axum::{Extension, Json};
use growthpro_core::{list_supported_categories, CategoryCatalog};

use crate::middleware::RequestId;

use super::{ApiResponse, ResponseMeta};

pub(super) async fn list_business_types(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CategoryCatalog>> {
    Json(ApiResponse {
        data: list_supported_categories(),
        meta: ResponseMeta::new(req_id.0),
    })
}
