use serde::{Deserialize, Serialize};

// 测验实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Test {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    // 满分，可为空
    pub total_marks: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
