use serde::Deserialize;

// 创建班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub code: String,
    pub category: Option<String>,
}

// 更新班级请求
//
// 仅支持修改归档状态，未提供的字段保持原值不变
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassRequest {
    pub is_archived: Option<bool>,
}
