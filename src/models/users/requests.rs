use serde::Deserialize;

use super::entities::UserRole;

// 创建用户请求（仅用于启动时预置账号）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
}
