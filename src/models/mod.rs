//! 业务数据模型
//!
//! 按领域划分：entities 为业务实体，requests 为请求体，responses 为响应体。

pub mod class_tests;
pub mod classes;
pub mod common;
pub mod enrollments;
pub mod submissions;
pub mod users;

pub use common::AppStartTime;
pub use common::response::{ErrorResponse, MessageResponse};
