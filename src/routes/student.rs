use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::errors::EduCheckError;
use crate::middlewares;
use crate::models::{
    enrollments::requests::JoinClassRequest, submissions::requests::CreateSubmissionRequest,
    users::entities::UserRole,
};
use crate::services::{AssessmentService, EnrollmentService};
use crate::utils::SafeTestIdI64;

// 懒加载的全局服务实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);
static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);

pub async fn join_class(
    req: HttpRequest,
    join_data: web::Json<JoinClassRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .join_class(&req, join_data.into_inner())
        .await
}

pub async fn list_my_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.list_my_classes(&req).await
}

// 答卷链接可省略：空请求体视为空提交，非空请求体必须是合法 JSON
pub async fn submit_test(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    let submission_data = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSubmissionRequest::default()
    } else {
        serde_json::from_slice::<CreateSubmissionRequest>(&body).map_err(|e| {
            EduCheckError::validation(format!("Invalid request body: {e}"))
        })?
    };
    ASSESSMENT_SERVICE
        .submit_test(&req, test_id.0, submission_data)
        .await
}

pub async fn list_my_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE.list_my_submissions(&req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/student")
            .wrap(middlewares::RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireIdentity::from_config())
            .route("/join", web::post().to(join_class))
            .route("/classes", web::get().to(list_my_classes))
            .route("/tests/{test_id}/submissions", web::post().to(submit_test))
            .route("/submissions", web::get().to(list_my_submissions)),
    );
}
