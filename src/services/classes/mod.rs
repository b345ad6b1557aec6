pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use std::sync::Arc;

use super::storage_error_response;
use crate::errors::EduCheckError;
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 教师创建班级
    pub async fn create_class(
        &self,
        req: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, req, class_data).await
    }

    // 列出教师自己的班级及学生
    pub async fn list_classes(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_classes(self, req).await
    }

    // 更新班级归档状态
    pub async fn update_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, req, class_id, update_data).await
    }

    // 删除班级
    pub async fn delete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, req, class_id).await
    }
}

/// 加载班级并校验归属：不存在返回 404，不属于该教师返回 403
pub(crate) async fn load_owned_class(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    class_id: i64,
) -> Result<Class, HttpResponse> {
    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => return Err(EduCheckError::not_found("Class not found").error_response()),
        Err(e) => return Err(storage_error_response("Failed to get class information", e)),
    };

    if class.teacher_id != teacher_id {
        return Err(EduCheckError::authorization(
            "You do not have permission to manage another teacher's class",
        )
        .error_response());
    }

    Ok(class)
}
