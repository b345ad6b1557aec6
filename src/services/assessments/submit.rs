use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::AssessmentService;
use crate::errors::EduCheckError;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::services::{caller_id, storage_error_response};

pub async fn submit_test(
    service: &AssessmentService,
    request: &HttpRequest,
    test_id: i64,
    submission_data: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let student_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let test = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => return Ok(EduCheckError::not_found("Test not found").error_response()),
        Err(e) => return Ok(storage_error_response("Failed to get test information", e)),
    };

    // 只有已加入班级的学生可以提交
    match storage.get_enrollment(student_id, test.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(
                EduCheckError::authorization("You are not enrolled in this class").error_response(),
            );
        }
        Err(e) => return Ok(storage_error_response("Failed to check enrollment", e)),
    }

    match storage
        .create_submission(test_id, student_id, submission_data)
        .await
    {
        Ok(submission) => {
            info!("Student {} submitted test {}", student_id, test_id);
            Ok(HttpResponse::Ok().json(submission))
        }
        Err(e) => Ok(storage_error_response("Submission failed", e)),
    }
}
