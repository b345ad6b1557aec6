//! 测验存储操作

use super::SeaOrmStorage;
use crate::entity::class_tests::{ActiveModel, Column, Entity as ClassTests};
use crate::errors::{EduCheckError, Result};
use crate::models::class_tests::{entities::Test, requests::CreateTestRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建测验
    pub async fn create_test_impl(&self, class_id: i64, req: CreateTestRequest) -> Result<Test> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            title: Set(req.title),
            total_marks: Set(req.total_marks),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_test())
    }

    /// 通过 ID 获取测验
    pub async fn get_test_by_id_impl(&self, test_id: i64) -> Result<Option<Test>> {
        let result = ClassTests::find_by_id(test_id)
            .one(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_test()))
    }

    /// 列出班级的测验
    pub async fn list_class_tests_impl(&self, class_id: i64) -> Result<Vec<Test>> {
        let tests = ClassTests::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(tests.into_iter().map(|m| m.into_test()).collect())
    }
}
