use actix_web::{HttpResponse, Responder, ResponseError, body::BoxBody, http::StatusCode};
use serde_json::Value;
use std::fmt::Display;

#[derive(Debug)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    response_code: StatusCode,
}

impl ApiResponse {
    /// Passing `Value::Null` produces an empty body (204-style responses).
    pub fn new(status_code: u16, json_value: Value) -> Self {
        let body = if json_value.is_null() {
            String::new()
        } else {
            serde_json::to_string(&json_value).unwrap()
        };

        ApiResponse {
            status_code,
            body,
            response_code: StatusCode::from_u16(status_code).unwrap(),
        }
    }
}

impl Responder for ApiResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> actix_web::HttpResponse<Self::Body> {
        if self.body.is_empty() {
            return HttpResponse::build(self.response_code).finish();
        }

        HttpResponse::build(self.response_code)
            .content_type("application/json")
            .body(self.body)
    }
}

impl Display for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error: {} \n Status Code: {}",
            self.body, self.status_code
        )
    }
}

impl ResponseError for ApiResponse {
    fn status_code(&self) -> StatusCode {
        self.response_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .body(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_serializes_body_and_keeps_status() {
        let res = ApiResponse::new(201, json!({ "message": "created" }));

        assert_eq!(res.status_code, 201);
        assert_eq!(res.body, r#"{"message":"created"}"#);
    }

    #[test]
    fn null_value_yields_empty_body() {
        let res = ApiResponse::new(204, serde_json::Value::Null);

        assert_eq!(res.status_code, 204);
        assert!(res.body.is_empty());
    }
}
