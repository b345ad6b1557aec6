use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::EduCheckError;
use crate::middlewares::RequireIdentity;

pub struct ProfileService;

impl ProfileService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 获取当前用户资料
    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        match RequireIdentity::extract_user(request) {
            Some(user) => Ok(HttpResponse::Ok().json(user)),
            None => Err(EduCheckError::authentication("Unauthorized: missing user").into()),
        }
    }
}
