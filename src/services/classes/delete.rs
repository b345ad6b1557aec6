use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::{ClassService, load_owned_class};
use crate::errors::EduCheckError;
use crate::models::MessageResponse;
use crate::services::{caller_id, storage_error_response};

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let teacher_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    if let Err(resp) = load_owned_class(&storage, teacher_id, class_id).await {
        return Ok(resp);
    }

    match storage.delete_class(class_id).await {
        Ok(true) => {
            info!("Class {} deleted by teacher {}", class_id, teacher_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Class deleted")))
        }
        Ok(false) => Ok(EduCheckError::not_found("Class not found").error_response()),
        Err(e) => Ok(storage_error_response("Class deletion failed", e)),
    }
}
