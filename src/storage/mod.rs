use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    class_tests::{entities::Test, requests::CreateTestRequest},
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    enrollments::entities::Enrollment,
    submissions::{entities::Submission, requests::CreateSubmissionRequest},
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级，邀请码重复时返回 Conflict
    async fn create_class(&self, teacher_id: i64, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过邀请码获取班级信息
    async fn get_class_by_code(&self, code: &str) -> Result<Option<Class>>;
    // 列出教师的全部班级
    async fn list_teacher_classes(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 选课管理方法
    // 学生加入班级，重复选课时返回 Conflict
    async fn create_enrollment(&self, student_id: i64, class_id: i64) -> Result<Enrollment>;
    // 获取学生在班级中的选课记录
    async fn get_enrollment(&self, student_id: i64, class_id: i64) -> Result<Option<Enrollment>>;
    // 批量获取班级的学生 ID，键为班级 ID
    async fn list_enrolled_student_ids(
        &self,
        class_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>>;
    // 列出学生所在的班级
    async fn list_student_classes(&self, student_id: i64) -> Result<Vec<Class>>;

    /// 测验管理方法
    async fn create_test(&self, class_id: i64, test: CreateTestRequest) -> Result<Test>;
    async fn get_test_by_id(&self, test_id: i64) -> Result<Option<Test>>;
    async fn list_class_tests(&self, class_id: i64) -> Result<Vec<Test>>;

    /// 提交管理方法
    async fn create_submission(
        &self,
        test_id: i64,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    async fn list_test_submissions(&self, test_id: i64) -> Result<Vec<Submission>>;
    async fn list_student_submissions(&self, student_id: i64) -> Result<Vec<Submission>>;
    // 录入得分
    async fn update_submission_marks(
        &self,
        submission_id: i64,
        marks_obtained: i32,
    ) -> Result<Option<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
