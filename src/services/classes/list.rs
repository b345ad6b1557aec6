use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::responses::ClassResponse;
use crate::services::{caller_id, storage_error_response};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let teacher_id = match caller_id(request) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let classes = match storage.list_teacher_classes(teacher_id).await {
        Ok(classes) => classes,
        Err(e) => return Ok(storage_error_response("Failed to retrieve class list", e)),
    };

    // 一次查询取回全部班级的学生
    let class_ids: Vec<i64> = classes.iter().map(|c| c.id).collect();
    let mut students = match storage.list_enrolled_student_ids(&class_ids).await {
        Ok(students) => students,
        Err(e) => return Ok(storage_error_response("Failed to retrieve enrollments", e)),
    };

    let response: Vec<ClassResponse> = classes
        .into_iter()
        .map(|class| {
            let enrolled = students.remove(&class.id).unwrap_or_default();
            ClassResponse::new(class, enrolled)
        })
        .collect();

    Ok(HttpResponse::Ok().json(response))
}
