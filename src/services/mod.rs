pub mod assessments;
pub mod classes;
pub mod enrollments;
pub mod profile;

pub use assessments::AssessmentService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use profile::ProfileService;

use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::error;

use crate::errors::EduCheckError;
use crate::middlewares::RequireIdentity;

/// 从请求中取出调用者 ID，缺失时返回 401 响应
pub(crate) fn caller_id(request: &HttpRequest) -> Result<i64, HttpResponse> {
    RequireIdentity::extract_user_id(request).ok_or_else(|| {
        EduCheckError::authentication("Unauthorized: missing user id").error_response()
    })
}

/// 将存储层错误转换为响应，服务端错误记录日志
pub(crate) fn storage_error_response(context: &str, err: EduCheckError) -> HttpResponse {
    if err.status_code().is_server_error() {
        error!("{}: {}", context, err);
    }
    err.error_response()
}
