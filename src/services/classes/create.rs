use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::errors::EduCheckError;
use crate::models::classes::{requests::CreateClassRequest, responses::ClassResponse};
use crate::services::{caller_id, storage_error_response};
use crate::utils::validate::{validate_class_code, validate_class_name};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let teacher_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let class_data = CreateClassRequest {
        name: class_data.name.trim().to_string(),
        code: class_data.code.trim().to_string(),
        category: class_data.category,
    };

    if let Err(msg) =
        validate_class_name(&class_data.name).and_then(|_| validate_class_code(&class_data.code))
    {
        return Ok(EduCheckError::validation(msg).error_response());
    }

    let storage = service.get_storage(request);

    // 预检查邀请码，并发写入时由唯一索引兜底
    match storage.get_class_by_code(&class_data.code).await {
        Ok(Some(_)) => {
            return Ok(EduCheckError::conflict("Class code already exists").error_response());
        }
        Ok(None) => {}
        Err(e) => return Ok(storage_error_response("Failed to check class code", e)),
    }

    match storage.create_class(teacher_id, class_data).await {
        Ok(class) => {
            info!("Class {} ({}) created by teacher {}", class.name, class.code, teacher_id);
            Ok(HttpResponse::Ok().json(ClassResponse::new(class, Vec::new())))
        }
        Err(e) => Ok(storage_error_response("Class creation failed", e)),
    }
}
