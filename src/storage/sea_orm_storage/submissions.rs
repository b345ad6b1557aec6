//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{EduCheckError, Result};
use crate::models::submissions::{entities::Submission, requests::CreateSubmissionRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建提交
    pub async fn create_submission_impl(
        &self,
        test_id: i64,
        student_id: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            test_id: Set(test_id),
            student_id: Set(student_id),
            answer_sheet_url: Set(req.answer_sheet_url),
            marks_obtained: Set(None),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出测验的全部提交
    pub async fn list_test_submissions_impl(&self, test_id: i64) -> Result<Vec<Submission>> {
        let submissions = Submissions::find()
            .filter(Column::TestId.eq(test_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(submissions
            .into_iter()
            .map(|m| m.into_submission())
            .collect())
    }

    /// 列出学生的全部提交
    pub async fn list_student_submissions_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        let submissions = Submissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(submissions
            .into_iter()
            .map(|m| m.into_submission())
            .collect())
    }

    /// 录入得分
    pub async fn update_submission_marks_impl(
        &self,
        submission_id: i64,
        marks_obtained: i32,
    ) -> Result<Option<Submission>> {
        if self.get_submission_by_id_impl(submission_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            marks_obtained: Set(Some(marks_obtained)),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("录入得分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }
}
