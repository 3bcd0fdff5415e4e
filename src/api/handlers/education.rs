// src/api/handlers/education.rs
use actix_web::{HttpResponse, Responder};
use crate::education::EducationManager;
use crate::api::types::{AlgorithmListResponse, ExampleListResponse};

/// List hashing algorithms
#[utoipa::path(
    get,
    path = "/api/algorithms",
    tag = "Education",
    responses(
        (status = 200, description = "Reference information for each hashing algorithm", body = AlgorithmListResponse)
    )
)]
pub async fn list_algorithms() -> impl Responder {
    let education_manager = EducationManager::new();

    HttpResponse::Ok().json(AlgorithmListResponse {
        success: true,
        data: education_manager.get_algorithms().to_vec(),
    })
}

/// List example passwords
#[utoipa::path(
    get,
    path = "/api/examples",
    tag = "Education",
    responses(
        (status = 200, description = "Demo passwords with their expected scores", body = ExampleListResponse)
    )
)]
pub async fn list_examples() -> impl Responder {
    let education_manager = EducationManager::new();

    HttpResponse::Ok().json(ExampleListResponse {
        success: true,
        data: education_manager.get_examples().to_vec(),
    })
}
