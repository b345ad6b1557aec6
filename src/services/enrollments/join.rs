use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::errors::EduCheckError;
use crate::models::{MessageResponse, enrollments::requests::JoinClassRequest};
use crate::services::{caller_id, storage_error_response};

pub async fn join_class(
    service: &EnrollmentService,
    request: &HttpRequest,
    join_data: JoinClassRequest,
) -> ActixResult<HttpResponse> {
    let student_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let class = match storage.get_class_by_code(join_data.code.trim()).await {
        Ok(Some(class)) => class,
        Ok(None) => return Ok(EduCheckError::not_found("Class not found").error_response()),
        Err(e) => return Ok(storage_error_response("Failed to look up class code", e)),
    };

    match storage.get_enrollment(student_id, class.id).await {
        Ok(Some(_)) => return Ok(EduCheckError::conflict("Already enrolled").error_response()),
        Ok(None) => {}
        Err(e) => return Ok(storage_error_response("Failed to check enrollment", e)),
    }

    // 并发加入时由唯一索引返回 Conflict
    match storage.create_enrollment(student_id, class.id).await {
        Ok(_) => {
            info!("Student {} joined class {} ({})", student_id, class.id, class.code);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Joined class successfully")))
        }
        Err(e) => Ok(storage_error_response("Failed to join class", e)),
    }
}
