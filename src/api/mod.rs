// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::crypto::HashParams;

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;

/// Per-server settings shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub hash_params: HashParams,
    pub default_password_length: usize,
    pub improve_top_n: usize,
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self {
            hash_params: config.hash_params(),
            default_password_length: config.default_password_length,
            improve_top_n: config.improve_top_n,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::system::health_check,

        // Analysis endpoints
        crate::api::handlers::analysis::analyze_password,
        crate::api::handlers::analysis::estimate_crack_time,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::improve_password,

        // Reference data
        crate::api::handlers::education::list_algorithms,
        crate::api::handlers::education::list_examples
    ),
    components(
        schemas(
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalysisResponse,
            crate::api::types::AnalysisData,
            crate::api::types::StrengthSummary,
            crate::api::types::CrackTimeEntry,
            crate::api::types::CrackTimeRequest,
            crate::api::types::CrackTimeResponse,
            crate::api::types::CrackTimeDetail,
            crate::api::types::HealthResponse,
            crate::api::types::AlgorithmListResponse,
            crate::api::types::ExampleListResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::GeneratedPasswordData,
            crate::api::types::ImproveResponse,
            crate::api::types::ImprovementData,
            crate::api::types::ErrorResponse,
            crate::analyzer::Algorithm,
            crate::analyzer::CharSets,
            crate::analyzer::StrengthLevel,
            crate::crypto::HashComparison,
            crate::education::AlgorithmInfo,
            crate::education::ExamplePassword,
            crate::models::Improvement
        )
    ),
    tags(
        (name = "Analysis", description = "Strength scoring and crack-time estimation"),
        (name = "Generator", description = "Password generation and improvement"),
        (name = "Education", description = "Reference data about hashing algorithms"),
        (name = "System", description = "Service health")
    ),
    info(
        title = "Password Security Lab API",
        version = "0.1.0",
        description = "Password strength analysis and hashing-algorithm comparison",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting Password Security Lab API on {}:{}", address, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        // Browser frontends are served from a different origin
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}
