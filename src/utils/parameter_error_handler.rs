//! 请求参数错误处理器
//!
//! 统一将 JSON 请求体的解析错误转换为 400 + `{"detail": ...}`。

use actix_web::{Error, HttpRequest, HttpResponse, error::InternalError, error::JsonPayloadError};
use tracing::debug;

use crate::models::ErrorResponse;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid JSON payload for {}: {}", req.path(), err);
    let detail = format!("Invalid request body: {err}");
    InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(detail)))
        .into()
}
