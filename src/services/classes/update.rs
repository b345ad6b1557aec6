use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use tracing::info;

use super::{ClassService, load_owned_class};
use crate::errors::EduCheckError;
use crate::models::{MessageResponse, classes::requests::UpdateClassRequest};
use crate::services::{caller_id, storage_error_response};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let teacher_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    if let Err(resp) = load_owned_class(&storage, teacher_id, class_id).await {
        return Ok(resp);
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => {
            info!(
                "Class {} updated by teacher {} (archived: {})",
                class.id, teacher_id, class.is_archived
            );
            Ok(HttpResponse::Ok().json(MessageResponse::new("Class updated")))
        }
        Ok(None) => Ok(EduCheckError::not_found("Class not found").error_response()),
        Err(e) => Ok(storage_error_response("Class update failed", e)),
    }
}
