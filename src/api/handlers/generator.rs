// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::analyzer::validate_password;
use crate::api::types::{
    AnalyzeRequest, ErrorResponse, ImproveResponse, ImprovementData, PasswordGenerationRequest,
    PasswordGenerationResponse,
};
use crate::api::AppState;
use crate::generators::{suggest_improvements, PasswordGenerator};
use crate::models::PasswordGenerationOptions;


/// Generate a random password
///
/// Guarantees one character from every selected class and reports the
/// analyzer's verdict on the result. An empty body means all defaults.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options or malformed body", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let request = match parse_generation_request(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("❌ Invalid request body: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid request body: {}", e)));
        }
    };

    // Create options with defaults or provided values
    let options = PasswordGenerationOptions {
        length: request.length.unwrap_or(state.default_password_length),
        include_lowercase: request.include_lowercase.unwrap_or(true),
        include_uppercase: request.include_uppercase.unwrap_or(true),
        include_digits: request.include_digits.unwrap_or(true),
        include_special: request.include_special.unwrap_or(true),
    };

    let generator = PasswordGenerator::new();
    match generator.generate_analyzed(&options, &mut rand::thread_rng()) {
        Ok(generated) => {
            info!("Generated {}-character password", generated.length);
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                data: Some(generated.into()),
                error: None,
            })
        }
        Err(e) => {
            warn!("Rejected generation request: {}", e);
            HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            })
        }
    }
}

// Blank bodies fall back to defaults; anything else must be a valid request
fn parse_generation_request(body: &[u8]) -> serde_json::Result<PasswordGenerationRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PasswordGenerationRequest::default());
    }
    serde_json::from_slice(body)
}

/// Suggest improved variants of a password
///
/// Runs the improvement catalog, scores each candidate and returns the best.
#[utoipa::path(
    post,
    path = "/api/improve",
    tag = "Generator",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Ranked improvements", body = ImproveResponse),
        (status = 400, description = "Missing or empty password", body = ImproveResponse)
    )
)]
pub async fn improve_password(
    state: web::Data<AppState>,
    request: web::Json<AnalyzeRequest>,
) -> HttpResponse {
    let original = match validate_password(request.password()) {
        Ok(password) => password.to_string(),
        Err(e) => {
            warn!("Rejected improvement request: {}", e);
            return HttpResponse::BadRequest().json(ImproveResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            });
        }
    };

    let improvements = suggest_improvements(&original, state.improve_top_n, &mut rand::thread_rng());

    HttpResponse::Ok().json(ImproveResponse {
        success: true,
        data: Some(ImprovementData {
            original,
            improvements,
        }),
        error: None,
    })
}
