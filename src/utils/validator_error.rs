use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::utils::api_response::ApiResponse;

/// Per-field validation failures, keyed by input field name.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationError {
    pub errors: HashMap<String, String>,
}

impl From<ValidationError> for ApiResponse {
    fn from(err: ValidationError) -> Self {
        ApiResponse::new(400, json!(err))
    }
}
