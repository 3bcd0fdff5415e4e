// src/api/utils.rs

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use log::warn;

use crate::api::types::ErrorResponse;

/// JSON extractor settings: malformed bodies get the usual failure envelope
/// instead of actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            warn!("❌ Invalid request body: {}", err);
            let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid request body: {}", err)));
            InternalError::from_response(err, response).into()
        })
}
