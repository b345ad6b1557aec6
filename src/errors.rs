//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 错误通过 `ResponseError` 直接映射为 HTTP 状态码与 `{"detail": ...}` 响应体。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sea_orm::{DbErr, SqlErr};

use crate::models::ErrorResponse;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_educheck_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduCheckError {
            $($variant(String),)*
        }

        impl EduCheckError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduCheckError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduCheckError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduCheckError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduCheckError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduCheckError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_educheck_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Resource Conflict"),
    Serialization("E007", "Serialization Error"),
    Authentication("E008", "Authentication Error"),
    Authorization("E009", "Authorization Error"),
}

impl EduCheckError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误转换为业务错误，唯一约束冲突视为 Conflict
    pub fn from_db(err: DbErr, conflict_message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                EduCheckError::Conflict(conflict_message.to_string())
            }
            _ => EduCheckError::DatabaseOperation(err.to_string()),
        }
    }
}

impl fmt::Display for EduCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduCheckError {}

impl ResponseError for EduCheckError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 重复邀请码、重复选课均按 400 返回
            EduCheckError::Validation(_) | EduCheckError::Conflict(_) => StatusCode::BAD_REQUEST,
            EduCheckError::NotFound(_) => StatusCode::NOT_FOUND,
            EduCheckError::Authentication(_) => StatusCode::UNAUTHORIZED,
            EduCheckError::Authorization(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<DbErr> for EduCheckError {
    fn from(err: DbErr) -> Self {
        EduCheckError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EduCheckError {
    fn from(err: serde_json::Error) -> Self {
        EduCheckError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduCheckError::database_config("test").code(), "E001");
        assert_eq!(EduCheckError::validation("test").code(), "E004");
        assert_eq!(EduCheckError::conflict("test").code(), "E006");
        assert_eq!(EduCheckError::authorization("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduCheckError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            EduCheckError::conflict("test").error_type(),
            "Resource Conflict"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduCheckError::conflict("Already enrolled");
        assert_eq!(err.message(), "Already enrolled");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            EduCheckError::conflict("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EduCheckError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EduCheckError::authentication("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            EduCheckError::authorization("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            EduCheckError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_non_constraint_db_error_is_operation_error() {
        let err = EduCheckError::from_db(DbErr::Custom("boom".into()), "dup");
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_format_simple() {
        let err = EduCheckError::validation("Invalid code");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid code"));
    }
}
