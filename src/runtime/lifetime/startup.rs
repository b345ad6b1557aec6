use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化默认账号
/// 如果数据库中没有任何用户，依次创建默认教师与默认学生（全新数据库上 ID 为 1 与 2）
pub async fn seed_default_users(storage: &Arc<dyn Storage>) {
    // 检查是否已有用户
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping default user seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default accounts...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping default user seed", e);
            return;
        }
    }

    let defaults = [
        ("teacher@localhost", "Default Teacher", UserRole::Teacher),
        ("student@localhost", "Default Student", UserRole::Student),
    ];

    for (email, name, role) in defaults {
        let request = CreateUserRequest {
            email: email.to_string(),
            name: Some(name.to_string()),
            role,
        };

        match storage.create_user(request).await {
            Ok(user) => {
                info!(
                    "Default {} account created (ID: {}, email: {})",
                    user.role, user.id, user.email
                );
            }
            Err(e) => {
                warn!("Failed to create default {} account: {}", role, e);
            }
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    if AppConfig::get().identity.seed_default_users {
        seed_default_users(&storage).await;
    }

    Ok(StartupContext { storage })
}
