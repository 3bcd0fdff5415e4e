// src/api/routes.rs
use actix_web::web;
use super::handlers;
use super::utils::json_config;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/health", web::get().to(handlers::system::health_check))
            // Analysis
            .route("/analyze", web::post().to(handlers::analysis::analyze_password))
            .route("/crack-time", web::post().to(handlers::analysis::estimate_crack_time))
            // Generator
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/improve", web::post().to(handlers::generator::improve_password))
            // Reference data
            .route("/algorithms", web::get().to(handlers::education::list_algorithms))
            .route("/examples", web::get().to(handlers::education::list_examples))
    );
}
