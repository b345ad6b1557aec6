use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::json;

use crate::models::AppStartTime;

pub async fn index() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "message": "EduCheck API is running",
        "docs": "/docs",
    })))
}

pub async fn health(start_time: Option<web::Data<AppStartTime>>) -> ActixResult<HttpResponse> {
    let uptime_seconds = start_time
        .map(|t| (chrono::Utc::now() - t.start_datetime).num_seconds())
        .unwrap_or(0);
    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "uptime_seconds": uptime_seconds,
    })))
}

// 配置路由，无需身份
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health));
}
