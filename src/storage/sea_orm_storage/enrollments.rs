//! 选课存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{EduCheckError, Result};
use crate::models::{classes::entities::Class, enrollments::entities::Enrollment};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 加入班级
    ///
    /// (student_id, class_id) 上有唯一索引，并发重复加入时返回 Conflict。
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            class_id: Set(class_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduCheckError::from_db(e, "Already enrolled"))?;

        Ok(result.into_enrollment())
    }

    /// 获取学生在班级中的选课记录
    pub async fn get_enrollment_impl(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::StudentId.eq(student_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 一次查询取出多个班级的学生 ID
    pub async fn list_enrolled_student_ids_impl(
        &self,
        class_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>> {
        let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
        if class_ids.is_empty() {
            return Ok(grouped);
        }

        let records = Enrollments::find()
            .filter(Column::ClassId.is_in(class_ids.to_vec()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询班级学生失败: {e}")))?;

        for record in records {
            grouped
                .entry(record.class_id)
                .or_default()
                .push(record.student_id);
        }

        Ok(grouped)
    }

    /// 列出学生所在的班级
    ///
    /// 通过选课记录关联班级，班级已被删除的选课记录自然被跳过。
    pub async fn list_student_classes_impl(&self, student_id: i64) -> Result<Vec<Class>> {
        let records = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询学生选课失败: {e}")))?;

        let class_ids: Vec<i64> = records.iter().map(|e| e.class_id).collect();
        if class_ids.is_empty() {
            return Ok(vec![]);
        }

        let classes = Classes::find()
            .filter(ClassColumn::Id.is_in(class_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| EduCheckError::database_operation(format!("查询学生班级失败: {e}")))?;

        // 保持选课顺序
        let mut by_id: HashMap<i64, Class> = classes
            .into_iter()
            .map(|m| (m.id, m.into_class()))
            .collect();

        Ok(class_ids
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect())
    }
}
