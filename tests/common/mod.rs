#![allow(dead_code)]

use std::sync::Arc;

use educheck::config::DatabaseConfig;
use educheck::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use educheck::storage::{Storage, sea_orm_storage::SeaOrmStorage};

/// 每个测试独立的内存数据库，已执行迁移
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    Arc::new(
        SeaOrmStorage::connect(&config)
            .await
            .expect("failed to open in-memory database"),
    )
}

pub async fn create_user(storage: &Arc<dyn Storage>, email: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            email: email.to_string(),
            name: None,
            role,
        })
        .await
        .expect("failed to create user")
}

/// 构建挂载全部路由的测试应用
#[macro_export]
macro_rules! init_app {
    ($storage:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($storage.clone()))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(educheck::utils::json_error_handler),
                )
                .configure(educheck::routes::configure_all_routes),
        )
        .await
    };
}

/// 发送请求并返回状态码与 JSON 响应体
#[macro_export]
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let bytes = actix_web::test::read_body(resp).await;
        let body: serde_json::Value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, body)
    }};
}
