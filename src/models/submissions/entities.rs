use serde::{Deserialize, Serialize};

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub test_id: i64,
    pub student_id: i64,
    // 答题卡链接
    pub answer_sheet_url: Option<String>,
    // 得分，未批改时为空
    pub marks_obtained: Option<i32>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
