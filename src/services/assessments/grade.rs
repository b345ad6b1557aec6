use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::{AssessmentService, load_owned_test};
use crate::errors::EduCheckError;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::services::{caller_id, storage_error_response};
use crate::utils::validate::validate_marks;

pub async fn grade_submission(
    service: &AssessmentService,
    request: &HttpRequest,
    submission_id: i64,
    grade_data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let teacher_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(EduCheckError::not_found("Submission not found").error_response());
        }
        Err(e) => return Ok(storage_error_response("Failed to get submission", e)),
    };

    let test = match load_owned_test(&storage, teacher_id, submission.test_id).await {
        Ok(test) => test,
        Err(resp) => return Ok(resp),
    };

    if let Err(msg) = validate_marks(grade_data.marks_obtained, test.total_marks) {
        return Ok(EduCheckError::validation(msg).error_response());
    }

    match storage
        .update_submission_marks(submission_id, grade_data.marks_obtained)
        .await
    {
        Ok(Some(submission)) => {
            info!(
                "Submission {} graded {} by teacher {}",
                submission_id, grade_data.marks_obtained, teacher_id
            );
            Ok(HttpResponse::Ok().json(submission))
        }
        Ok(None) => Ok(EduCheckError::not_found("Submission not found").error_response()),
        Err(e) => Ok(storage_error_response("Grading failed", e)),
    }
}
