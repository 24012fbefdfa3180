use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request bodies above this size are rejected before parsing.
pub const JSON_PAYLOAD_LIMIT: usize = 256 * 1024;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl ApiResponse<()> {
    // Error response (no data)
    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}

/// JSON extractor settings: malformed bodies become `{"detail": ...}` 400s,
/// a non-JSON content type a 415.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON payload for {} {}: {}", req.method(), req.path(), err);

    match &err {
        JsonPayloadError::ContentType => AppError::UnsupportedMediaType(
            "Unsupported media type; expected application/json.".to_string(),
        )
        .into(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            AppError::BadRequest("Request body is too large.".to_string()).into()
        }
        _ => AppError::BadRequest(format!("JSON parse error - {}", err)).into(),
    }
}
