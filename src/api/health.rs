use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::Store;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

/// GET / - texto de boas-vindas
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Welcome text", body = String, content_type = "text/plain")
    )
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to RECIPEDIA")
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<dyn Store>) -> impl Responder {
    let database_up = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("⚠️ Health check: {}", e);
            false
        }
    };

    let response = HealthResponse {
        status: if database_up { "healthy" } else { "unhealthy" }.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_up { "up" } else { "down" }.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if database_up {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
