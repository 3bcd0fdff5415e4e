// src/api/handlers/analysis.rs

use actix_web::{web, HttpResponse};
use log::{error, info, warn};

use crate::analyzer::{validate_password, PasswordAnalyzer};
use crate::api::types::{
    AnalysisData, AnalysisResponse, AnalyzeRequest, CrackTimeDetail, CrackTimeRequest, CrackTimeResponse,
};
use crate::api::AppState;
use crate::crypto;

/// Analyze password strength
///
/// Scores the password, projects crack times for all five hashing
/// strategies, lists suggestions and shows a digest per algorithm.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Full password analysis", body = AnalysisResponse),
        (status = 400, description = "Missing or empty password", body = AnalysisResponse),
        (status = 500, description = "Server error", body = AnalysisResponse)
    )
)]
pub async fn analyze_password(
    state: web::Data<AppState>,
    request: web::Json<AnalyzeRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    let analyzer = match validate_password(request.password()).and_then(PasswordAnalyzer::new) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            warn!("Rejected analysis request: {}", e);
            return HttpResponse::BadRequest().json(AnalysisResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            });
        }
    };

    // bcrypt and argon2 are deliberately slow; keep them off the worker threads
    let password = request.password().unwrap_or_default().to_string();
    let params = state.hash_params.clone();
    let hashes = match web::block(move || crypto::hash_comparison(&password, &params)).await {
        Ok(hashes) => hashes,
        Err(e) => {
            error!("Hashing task failed: {}", e);
            return HttpResponse::InternalServerError().json(AnalysisResponse {
                success: false,
                data: None,
                error: Some(format!("Hashing task failed: {}", e)),
            });
        }
    };

    info!(
        "Analyzed password: score {} ({})",
        analyzer.strength_score(),
        analyzer.strength_level()
    );

    HttpResponse::Ok().json(AnalysisResponse {
        success: true,
        data: Some(AnalysisData::new(&analyzer, &hashes)),
        error: None,
    })
}

/// Estimate crack time for one algorithm
#[utoipa::path(
    post,
    path = "/api/crack-time",
    tag = "Analysis",
    request_body = CrackTimeRequest,
    responses(
        (status = 200, description = "Crack-time estimate", body = CrackTimeResponse),
        (status = 400, description = "Missing password or unknown algorithm", body = CrackTimeResponse)
    )
)]
pub async fn estimate_crack_time(request: web::Json<CrackTimeRequest>) -> HttpResponse {
    let estimate = validate_password(request.password())
        .and_then(PasswordAnalyzer::new)
        .and_then(|analyzer| analyzer.estimate_crack_time(&request.algorithm));

    match estimate {
        Ok(estimate) => HttpResponse::Ok().json(CrackTimeResponse {
            success: true,
            data: Some(CrackTimeDetail::from(estimate)),
            error: None,
        }),
        Err(e) => {
            warn!("Rejected crack-time request: {}", e);
            HttpResponse::BadRequest().json(CrackTimeResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            })
        }
    }
}
