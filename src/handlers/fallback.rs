use serde_json::json;

use crate::utils::api_response::ApiResponse;

pub async fn not_found() -> Result<ApiResponse, ApiResponse> {
    Ok(ApiResponse::new(
        404,
        json!({ "message": "Route not found" }),
    ))
}
