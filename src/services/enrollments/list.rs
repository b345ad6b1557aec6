use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::classes::responses::ClassResponse;
use crate::services::{caller_id, storage_error_response};

pub async fn list_my_classes(
    service: &EnrollmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let student_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.list_student_classes(student_id).await {
        Ok(classes) => {
            let response: Vec<ClassResponse> =
                classes.into_iter().map(ClassResponse::summary).collect();
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => Ok(storage_error_response("Failed to retrieve joined classes", e)),
    }
}
