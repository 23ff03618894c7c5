use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::payroll::PayrollError;

impl ResponseError for PayrollError {
    fn status_code(&self) -> StatusCode {
        match self {
            PayrollError::UnknownShortcut(_) => StatusCode::NOT_FOUND,
            PayrollError::ReversedRange(..) | PayrollError::FutureDate(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!(error = %self, "Rejected payroll request");
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

/// Malformed JSON bodies answer with the same `{"message": ...}` shape.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(error = %err, "Invalid JSON payload");
        let response = HttpResponse::BadRequest().json(json!({
            "message": format!("Invalid request body: {err}")
        }));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
