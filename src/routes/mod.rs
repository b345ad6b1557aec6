pub mod profile;

pub mod student;

pub mod system;

pub mod teacher;

pub use profile::configure_profile_routes;
pub use student::configure_student_routes;
pub use system::configure_system_routes;
pub use teacher::configure_teacher_routes;

use actix_web::web;

// 注册全部路由
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_teacher_routes)
        .configure(configure_student_routes)
        .configure(configure_profile_routes);
}
