use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::config::Config;
use crate::database::{models::ServiceResponse, repositories::ServiceRepository};
use crate::error::AppError;
use crate::handlers::validation::validate_service;

/// Media root that image paths are joined onto. A relative `MEDIA_URL` is
/// made absolute with the scheme and host the request arrived on.
fn media_base(req: &HttpRequest, media_url: &str) -> String {
    if media_url.starts_with("http://") || media_url.starts_with("https://") {
        return media_url.to_string();
    }

    let conn = req.connection_info();
    format!("{}://{}{}", conn.scheme(), conn.host(), media_url)
}

/// GET /api/services/: every service, alphabetical by name.
pub async fn list_services(
    req: HttpRequest,
    service_repo: web::Data<ServiceRepository>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let services = service_repo.get_all_services().await?;
    let media_url = media_base(&req, &config.media_url);

    let body: Vec<ServiceResponse> = services
        .into_iter()
        .map(|service| ServiceResponse::from_service(service, &media_url))
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/services/: validate and insert a single service.
pub async fn create_service(
    req: HttpRequest,
    service_repo: web::Data<ServiceRepository>,
    config: web::Data<Config>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let input = validate_service(&payload)?;

    let service = service_repo.create_service(input).await?;
    let media_url = media_base(&req, &config.media_url);

    Ok(HttpResponse::Created().json(ServiceResponse::from_service(service, &media_url)))
}
