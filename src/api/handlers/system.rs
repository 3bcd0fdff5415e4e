// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use crate::api::types::HealthResponse;
use crate::crypto::ARGON2_AVAILABLE;

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        argon2_available: ARGON2_AVAILABLE,
    })
}
