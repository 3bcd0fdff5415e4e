//! HTTP API integration tests
//!
//! Drives the actix routes in-process with cheap hashing parameters.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use password_lab::api::routes::configure_routes;
use password_lab::api::AppState;
use password_lab::crypto::{HashParams, ARGON2_AVAILABLE};

fn fast_state() -> AppState {
    AppState {
        hash_params: HashParams {
            bcrypt_cost: 4,
            argon2_memory_cost: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
            ..HashParams::default()
        },
        default_password_length: 16,
        improve_top_n: 5,
    }
}

macro_rules! lab_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(fast_state()))
                .configure(configure_routes),
        )
        .await
    };
}

/// Health reports the compiled-in Argon2 backend
#[actix_web::test]
async fn test_health_check() {
    let app = lab_app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["argon2_available"], ARGON2_AVAILABLE);
}

/// Missing and empty passwords are client errors
#[actix_web::test]
async fn test_analyze_rejects_missing_or_empty_password() {
    let app = lab_app!();

    for (payload, message) in [
        (json!({}), "Password is required"),
        (json!({ "password": "" }), "Password cannot be empty"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], message);
        assert!(body.get("data").is_none());
    }
}

/// An explicit null is a supplied but empty password
#[actix_web::test]
async fn test_null_password_is_empty() {
    let app = lab_app!();

    for uri in ["/api/analyze", "/api/improve"] {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(json!({ "password": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Password cannot be empty");
    }
}

/// Malformed JSON gets the failure envelope too
#[actix_web::test]
async fn test_analyze_rejects_malformed_body() {
    let app = lab_app!();
    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

/// Full analysis shape: strength, five ordered crack times, suggestions, digests
#[actix_web::test]
async fn test_analyze_success() {
    let app = lab_app!();
    let password = "correct-horse-battery-staple-2024-and-then-some-more-words!";
    let req = test::TestRequest::post()
        .uri("/api/analyze")
        .set_json(json!({ "password": password }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body.get("error").is_none());

    let data = &body["data"];
    assert_eq!(data["strength"]["length"], 59);
    assert_eq!(data["strength"]["level"], "Very Strong");
    assert_eq!(data["strength"]["is_common"], false);

    let algorithms: Vec<&str> = data["crack_times"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["algorithm"].as_str().unwrap())
        .collect();
    assert_eq!(algorithms, ["plaintext", "md5", "sha256", "bcrypt", "argon2"]);

    assert!(!data["suggestions"].as_array().unwrap().is_empty());

    let hashes = &data["hashes"];
    assert_eq!(hashes["plaintext"], password);
    assert_eq!(hashes["md5"].as_str().unwrap().len(), 32);
    assert!(hashes["bcrypt"].as_str().unwrap().starts_with("$2"));
    for field in ["plaintext", "md5", "sha256", "bcrypt", "argon2"] {
        let value = hashes[field].as_str().unwrap();
        assert!(value.chars().count() <= 63, "{} not truncated", field);
    }
    if ARGON2_AVAILABLE {
        let argon2 = hashes["argon2"].as_str().unwrap();
        assert!(argon2.starts_with("$argon2id$"));
        assert!(argon2.ends_with("..."));
    }
}

/// Single-algorithm estimate reports the exact keyspace
#[actix_web::test]
async fn test_crack_time_endpoint() {
    let app = lab_app!();
    let req = test::TestRequest::post()
        .uri("/api/crack-time")
        .set_json(json!({ "password": "Pass123", "algorithm": "md5" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["algorithm"], "md5");
    assert_eq!(body["data"]["combinations"], "3521614606208");
    assert_eq!(body["data"]["time_human"], "9.78 seconds");
}

#[actix_web::test]
async fn test_crack_time_unknown_algorithm() {
    let app = lab_app!();
    let req = test::TestRequest::post()
        .uri("/api/crack-time")
        .set_json(json!({ "password": "Pass123", "algorithm": "sha1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unknown algorithm: sha1");
}

/// Reference data endpoints
#[actix_web::test]
async fn test_reference_data() {
    let app = lab_app!();

    let req = test::TestRequest::get().uri("/api/algorithms").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let req = test::TestRequest::get().uri("/api/examples").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let examples = body["data"].as_array().unwrap();
    assert_eq!(examples.len(), 5);
    assert_eq!(examples[1]["password"], "Pass123");
    assert_eq!(examples[1]["expected_score"], 22);
}

/// Generation honours options and rejects an empty class selection
#[actix_web::test]
async fn test_generate_password() {
    let app = lab_app!();

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "length": 24, "include_special": false }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let password = body["data"]["password"].as_str().unwrap();
    assert_eq!(password.len(), 24);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({
            "include_lowercase": false,
            "include_uppercase": false,
            "include_digits": false,
            "include_special": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "At least one character type must be selected");
}

/// Bodies that do not parse are rejected instead of falling back to defaults
#[actix_web::test]
async fn test_generate_rejects_malformed_body() {
    let app = lab_app!();

    for payload in ["{not json", r#"{"length":"abc"}"#, r#"{"length":-5}"#] {
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }
}

/// Lengths above the cap are rejected
#[actix_web::test]
async fn test_generate_rejects_overlong_length() {
    let app = lab_app!();
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "length": 129 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Password length must be at most 128 characters");
}

/// Without a body the configured default length is used
#[actix_web::test]
async fn test_generate_password_defaults() {
    let app = lab_app!();
    let req = test::TestRequest::post().uri("/api/generate").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["length"], 16);
}

/// Improvements are capped and best first
#[actix_web::test]
async fn test_improve_password() {
    let app = lab_app!();
    let req = test::TestRequest::post()
        .uri("/api/improve")
        .set_json(json!({ "password": "sunshine" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["original"], "sunshine");
    let improvements = body["data"]["improvements"].as_array().unwrap();
    assert!(!improvements.is_empty() && improvements.len() <= 5);

    let scores: Vec<u64> = improvements.iter().map(|i| i["score"].as_u64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}
