//! 中间件
//!
//! - `RequireIdentity`: 解析调用者身份
//! - `RequireRole`: 校验调用者角色

pub mod require_identity;
pub mod require_role;

pub use require_identity::RequireIdentity;
pub use require_role::RequireRole;

use actix_web::{HttpResponse, http::StatusCode};

use crate::models::ErrorResponse;

// 辅助函数：创建错误响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}
