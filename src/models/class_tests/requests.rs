use serde::Deserialize;

// 创建测验请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestRequest {
    pub title: String,
    pub total_marks: Option<i32>,
}
