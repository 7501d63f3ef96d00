use actix_web::get;
use serde_json::json;

use crate::utils::api_response::ApiResponse;

#[utoipa::path(
    responses(
        (status = 200, description = "API is running")
    ),
    tag = "Health"
)]
#[get("/health")]
pub async fn health() -> Result<ApiResponse, ApiResponse> {
    Ok(ApiResponse::new(
        200,
        json!({
            "status": "OK",
            "message": "API is running"
        }),
    ))
}
