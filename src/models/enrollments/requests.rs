use serde::Deserialize;

// 加入班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct JoinClassRequest {
    pub code: String,
}
