use actix_web::web;

use crate::handlers::{services, shared::json_config};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/services")
            .app_data(json_config())
            .route("/", web::get().to(services::list_services))
            .route("/", web::post().to(services::create_service))
            .route("", web::get().to(services::list_services))
            .route("", web::post().to(services::create_service)),
    );
}
