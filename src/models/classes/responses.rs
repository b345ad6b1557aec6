use super::entities::Class;
use serde::{Deserialize, Serialize};

// 班级响应，附带已选课学生 ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub category: Option<String>,
    pub is_archived: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub enrolled_students: Vec<i64>,
}

impl ClassResponse {
    pub fn new(class: Class, enrolled_students: Vec<i64>) -> Self {
        Self {
            id: class.id,
            name: class.name,
            code: class.code,
            category: class.category,
            is_archived: class.is_archived,
            created_at: class.created_at,
            enrolled_students,
        }
    }

    // 学生视图不返回班级成员
    pub fn summary(class: Class) -> Self {
        Self::new(class, Vec::new())
    }
}
