use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 邀请码，全局唯一
    pub code: String,
    // 分类，如 "1st Year"
    pub category: Option<String>,
    // 教师ID
    pub teacher_id: i64,
    // 是否归档
    pub is_archived: bool,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
