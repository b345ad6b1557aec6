use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::{
    class_tests::requests::CreateTestRequest,
    classes::requests::{CreateClassRequest, UpdateClassRequest},
    submissions::requests::GradeSubmissionRequest,
    users::entities::UserRole,
};
use crate::services::{AssessmentService, ClassService};
use crate::utils::{SafeClassIdI64, SafeSubmissionIdI64, SafeTestIdI64};

// 懒加载的全局服务实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);

// HTTP处理程序
pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

pub async fn create_test(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    test_data: web::Json<CreateTestRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .create_test(&req, class_id.0, test_data.into_inner())
        .await
}

pub async fn list_tests(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE.list_tests(&req, class_id.0).await
}

pub async fn list_test_submissions(
    req: HttpRequest,
    test_id: SafeTestIdI64,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .list_test_submissions(&req, test_id.0)
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    submission_id: SafeSubmissionIdI64,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .grade_submission(&req, submission_id.0, grade_data.into_inner())
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teacher")
            .wrap(middlewares::RequireRole::new(&UserRole::Teacher))
            .wrap(middlewares::RequireIdentity::from_config())
            .service(
                web::resource("/classes")
                    .route(web::post().to(create_class))
                    .route(web::get().to(list_classes)),
            )
            .service(
                web::resource("/classes/{class_id}")
                    .route(web::put().to(update_class))
                    .route(web::delete().to(delete_class)),
            )
            .service(
                web::resource("/classes/{class_id}/tests")
                    .route(web::post().to(create_test))
                    .route(web::get().to(list_tests)),
            )
            .service(
                web::resource("/tests/{test_id}/submissions")
                    .route(web::get().to(list_test_submissions)),
            )
            .service(
                web::resource("/submissions/{submission_id}")
                    .route(web::put().to(grade_submission)),
            ),
    );
}
