/*!
 * 调用者身份中间件
 *
 * 认证由上游网关完成，网关在请求头（默认 `X-User-Id`）中写入已认证的用户 ID。
 * 此中间件读取该请求头，从存储层加载用户并写入请求扩展，供后续处理程序使用。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireIdentity;
 *
 * cfg.service(
 *     web::scope("/api/teacher")
 *         .wrap(RequireIdentity::from_config())
 *         .route("/classes", web::get().to(list_classes)),
 * );
 *
 * async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
 *     let teacher_id = RequireIdentity::extract_user_id(&req);
 *     // ...
 * }
 * ```
 *
 * 请求头缺失、格式错误或用户不存在时返回 401。
 */

use crate::config::AppConfig;
use crate::errors::EduCheckError;
use crate::models::users::entities::User;
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    ResponseError,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, error, info};


pub const DEFAULT_IDENTITY_HEADER: &str = "X-User-Id";

#[derive(Clone)]
pub struct RequireIdentity {
    header: String,
}

impl Default for RequireIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY_HEADER)
    }
}

impl RequireIdentity {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    /// 使用配置中的请求头名称
    pub fn from_config() -> Self {
        Self::new(AppConfig::get().identity.header.clone())
    }
}

// 辅助函数：解析请求头并加载用户
// 请求头缺失、格式错误或用户不存在为认证错误，存储故障原样返回
async fn resolve_identity(req: &ServiceRequest, header: &str) -> Result<User, EduCheckError> {
    let user_id = req
        .headers()
        .get(header)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| EduCheckError::authentication(format!("Unauthorized: Missing {header} header")))?
        .trim()
        .parse::<i64>()
        .map_err(|_| EduCheckError::authentication(format!("Unauthorized: Invalid {header} header")))?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| EduCheckError::database_config("Storage not configured"))?
        .get_ref()
        .clone();

    storage
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| EduCheckError::authentication("Unauthorized: User not found"))
}

impl<S, B> Transform<S, ServiceRequest> for RequireIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireIdentityMiddleware {
            service: Rc::new(service),
            header: Rc::from(self.header.as_str()),
        }))
    }
}

pub struct RequireIdentityMiddleware<S> {
    service: Rc<S>,
    header: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for RequireIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let header = self.header.clone();
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                let res = srv.call(req).await?.map_into_left_body();
                return Ok(res);
            }

            match resolve_identity(&req, &header).await {
                Ok(user) => {
                    debug!("Identity resolved for user ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    let status = err.status_code();
                    if status.is_server_error() {
                        error!("Failed to resolve identity for {}: {}", req.path(), err);
                    } else {
                        info!(
                            "Identity resolution failed for request to {}: {}",
                            req.path(),
                            err
                        );
                    }
                    Ok(req.into_response(err.error_response().map_into_right_body()))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireIdentity {
    /// 从请求扩展中提取当前用户
    /// 此函数应该在应用了RequireIdentity中间件的路由处理程序中使用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    /// 从请求扩展中提取用户ID
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<User>().map(|user| user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use sea_orm::ConnectionTrait;

    #[actix_web::test]
    async fn test_storage_failure_is_server_error() {
        let storage = SeaOrmStorage::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
        .unwrap();
        // 删除用户表，使用户查询失败
        storage.db.execute_unprepared("DROP TABLE users").await.unwrap();
        let storage: Arc<dyn Storage> = Arc::new(storage);

        let app = test::init_service(
            App::new().app_data(web::Data::new(storage)).service(
                web::scope("/api")
                    .wrap(RequireIdentity::default())
                    .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/ping")
            .insert_header((DEFAULT_IDENTITY_HEADER, "1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::get().uri("/api/ping").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
