use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssessmentService, load_owned_test};
use crate::services::{caller_id, storage_error_response};

pub async fn list_test_submissions(
    service: &AssessmentService,
    request: &HttpRequest,
    test_id: i64,
) -> ActixResult<HttpResponse> {
    let teacher_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    if let Err(resp) = load_owned_test(&storage, teacher_id, test_id).await {
        return Ok(resp);
    }

    match storage.list_test_submissions(test_id).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(submissions)),
        Err(e) => Ok(storage_error_response("Failed to retrieve submissions", e)),
    }
}

pub async fn list_my_submissions(
    service: &AssessmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let student_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.list_student_submissions(student_id).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(submissions)),
        Err(e) => Ok(storage_error_response("Failed to retrieve submissions", e)),
    }
}
