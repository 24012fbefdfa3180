use actix_web::web;

pub mod services;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(services::configure));
}
