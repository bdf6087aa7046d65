pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;

use actix_web::web;

// Origins allowed to call this API cross-origin. Anything else is rejected
// by the CORS middleware.
pub const ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];

pub fn employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees")
            .route(web::get().to(handlers::employee::list_employees))
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    );
}
