//! 测验与提交
//!
//! 教师在自己的班级下发布测验、查看提交并评分；学生向已加入班级的测验提交答卷。

pub mod grade;
pub mod submissions;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use std::sync::Arc;

use super::storage_error_response;
use crate::errors::EduCheckError;
use crate::models::{
    class_tests::{entities::Test, requests::CreateTestRequest},
    submissions::requests::{CreateSubmissionRequest, GradeSubmissionRequest},
};
use crate::storage::Storage;

pub struct AssessmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssessmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 在班级下创建测验
    pub async fn create_test(
        &self,
        request: &HttpRequest,
        class_id: i64,
        test_data: CreateTestRequest,
    ) -> ActixResult<HttpResponse> {
        class_tests::create_test(self, request, class_id, test_data).await
    }

    // 列出班级的测验
    pub async fn list_tests(&self, request: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        class_tests::list_tests(self, request, class_id).await
    }

    // 教师查看某次测验的全部提交
    pub async fn list_test_submissions(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        submissions::list_test_submissions(self, request, test_id).await
    }

    // 学生查看自己的提交
    pub async fn list_my_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        submissions::list_my_submissions(self, request).await
    }

    // 学生提交答卷
    pub async fn submit_test(
        &self,
        request: &HttpRequest,
        test_id: i64,
        submission_data: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_test(self, request, test_id, submission_data).await
    }

    // 教师评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        grade_data: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, grade_data).await
    }
}

/// 加载测验并校验其所属班级归教师所有
pub(crate) async fn load_owned_test(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    test_id: i64,
) -> Result<Test, HttpResponse> {
    let test = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => return Err(EduCheckError::not_found("Test not found").error_response()),
        Err(e) => return Err(storage_error_response("Failed to get test information", e)),
    };

    super::classes::load_owned_class(storage, teacher_id, test.class_id).await?;

    Ok(test)
}
